use crate::board::Board;
use crate::types::{GameOutcome, Player, Position};
use crate::win_detector::classify;

/// Score of a position where the player on the move has won.
pub const WIN_SCORE: i32 = 1000;
/// Score of a position where the opponent of the player on the move has won.
pub const LOSS_SCORE: i32 = -1000;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Finds the optimal move for `player` by exhaustively searching every legal
/// continuation, assuming the opponent also plays optimally. The board is
/// mutated during lookahead and restored before each candidate returns.
///
/// The board must classify as ongoing; a finished board has no move to find
/// and is reported as an error.
pub fn best_move(player: Player, board: &mut Board) -> Result<(Position, i32), String> {
    if classify(board) != GameOutcome::Ongoing {
        return Err("no move exists: the game is already over".to_string());
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err("board is ongoing but has no legal moves".to_string());
    }

    // The sentinel sits strictly below LOSS_SCORE so the first candidate
    // always replaces it, even in positions where every move loses.
    let mut best_score = i32::MIN;
    let mut best_pos = None;

    for pos in moves {
        board.place(pos, player);
        let score = -negamax(board, player.opponent());
        board.clear(pos);

        if score > best_score {
            best_score = score;
            best_pos = Some(pos);
        }
    }

    let pos = best_pos.ok_or_else(|| "search finished without selecting a move".to_string())?;
    Ok((pos, best_score))
}

/// Value of `board` for `to_move` under optimal play by both sides. A child
/// score is negated on the way up: the best outcome for the opponent is the
/// worst for the mover.
fn negamax(board: &mut Board, to_move: Player) -> i32 {
    match classify(board) {
        GameOutcome::Won(line) => {
            if line.winner == to_move {
                WIN_SCORE
            } else {
                LOSS_SCORE
            }
        }
        GameOutcome::Draw => DRAW_SCORE,
        GameOutcome::Ongoing => {
            let moves = board.legal_moves();
            debug_assert!(!moves.is_empty(), "ongoing board with no legal moves");

            let mut best = i32::MIN;
            for pos in moves {
                board.place(pos, to_move);
                let score = -negamax(board, to_move.opponent());
                board.clear(pos);

                if score > best {
                    best = score;
                }
            }
            best
        }
    }
}
