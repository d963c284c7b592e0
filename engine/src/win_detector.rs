use crate::board::Board;
use crate::types::{Cell, GameOutcome, Position, WinningLine};

/// The eight ways to win: three rows top to bottom, three columns left to
/// right, then the two diagonals.
const WINNING_LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Classifies the board as won, drawn, or ongoing. Win checks run before the
/// draw check; when one player completed several lines at once, the first
/// line in table order is returned as evidence.
pub fn classify(board: &Board) -> GameOutcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Cell::Marked(player) = board.get(a)
            && board.get(b) == Cell::Marked(player)
            && board.get(c) == Cell::Marked(player)
        {
            return GameOutcome::Won(WinningLine {
                winner: player,
                cells: line,
            });
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}
