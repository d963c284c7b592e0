use crate::board::Board;
use crate::minimax::best_move;
use crate::types::{GRID_SIZE, GameOutcome, Player, Position, WinningLine};
use crate::win_detector::classify;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the human to place a mark.
    Playing,
    /// The engine's reply is pending.
    Thinking,
    /// The game has ended; only a reset leaves this phase.
    Finished,
}

/// Receives the outcome of each engine round trip. Implemented by the
/// presentation layer; the session never knows how results are shown.
pub trait OutcomeSink {
    fn on_player_won(&mut self, line: &WinningLine);
    fn on_draw(&mut self);
    fn on_engine_move(&mut self, pos: Position);
    fn on_engine_won(&mut self, line: &WinningLine);
}

/// One game between the human and the engine. Owns the board, validates the
/// human's moves, and drives the engine's replies.
pub struct GameSession {
    board: Board,
    human_mark: Player,
    engine_mark: Player,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(human_mark: Player) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            engine_mark: human_mark.opponent(),
            phase: Self::opening_phase(human_mark),
        }
    }

    #[cfg(test)]
    fn from_parts(board: Board, human_mark: Player, phase: SessionPhase) -> Self {
        Self {
            board,
            human_mark,
            engine_mark: human_mark.opponent(),
            phase,
        }
    }

    // X opens, so the engine moves first whenever the human plays O.
    fn opening_phase(human_mark: Player) -> SessionPhase {
        match human_mark {
            Player::X => SessionPhase::Playing,
            Player::O => SessionPhase::Thinking,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn human_mark(&self) -> Player {
        self.human_mark
    }

    pub fn engine_mark(&self) -> Player {
        self.engine_mark
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<(), String> {
        match self.phase {
            SessionPhase::Finished => return Err("game is already over".to_string()),
            SessionPhase::Thinking => return Err("not your turn".to_string()),
            SessionPhase::Playing => {}
        }

        if pos.col >= GRID_SIZE || pos.row >= GRID_SIZE {
            return Err("position out of bounds".to_string());
        }

        if !self.board.is_valid_move(pos) {
            return Err("cell is already marked".to_string());
        }

        self.board.place(pos, self.human_mark);
        self.phase = SessionPhase::Thinking;
        Ok(())
    }

    /// Runs one engine round trip: reports a win or draw if the human's move
    /// already ended the game, otherwise picks the engine's reply, applies
    /// it, and reports the result.
    pub fn play_engine_turn(&mut self, sink: &mut impl OutcomeSink) -> Result<(), String> {
        if self.phase != SessionPhase::Thinking {
            return Err("engine has no pending turn".to_string());
        }

        match classify(&self.board) {
            GameOutcome::Won(line) => {
                self.phase = SessionPhase::Finished;
                sink.on_player_won(&line);
                return Ok(());
            }
            GameOutcome::Draw => {
                self.phase = SessionPhase::Finished;
                sink.on_draw();
                return Ok(());
            }
            GameOutcome::Ongoing => {}
        }

        let (pos, _score) = best_move(self.engine_mark, &mut self.board)?;
        self.board.place(pos, self.engine_mark);
        sink.on_engine_move(pos);

        match classify(&self.board) {
            GameOutcome::Won(line) => {
                self.phase = SessionPhase::Finished;
                sink.on_engine_won(&line);
            }
            GameOutcome::Draw => {
                self.phase = SessionPhase::Finished;
                sink.on_draw();
            }
            GameOutcome::Ongoing => {
                self.phase = SessionPhase::Playing;
            }
        }

        Ok(())
    }

    /// Empties the board and returns to the opening phase for a new game.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Self::opening_phase(self.human_mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum SinkEvent {
        PlayerWon(Player),
        Draw,
        EngineMove(Position),
        EngineWon(Player),
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<SinkEvent>,
    }

    impl OutcomeSink for RecordingSink {
        fn on_player_won(&mut self, line: &WinningLine) {
            self.events.push(SinkEvent::PlayerWon(line.winner));
        }

        fn on_draw(&mut self) {
            self.events.push(SinkEvent::Draw);
        }

        fn on_engine_move(&mut self, pos: Position) {
            self.events.push(SinkEvent::EngineMove(pos));
        }

        fn on_engine_won(&mut self, line: &WinningLine) {
            self.events.push(SinkEvent::EngineWon(line.winner));
        }
    }

    #[test]
    fn test_human_x_opens_engine_o_waits() {
        let session = GameSession::new(Player::X);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.engine_mark(), Player::O);
    }

    #[test]
    fn test_engine_opens_when_human_plays_o() {
        let mut session = GameSession::new(Player::O);
        assert_eq!(session.phase(), SessionPhase::Thinking);

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        // Every opening draws under optimal play, so the engine keeps the
        // first candidate in enumeration order.
        assert_eq!(sink.events, vec![SinkEvent::EngineMove(Position::new(0, 0))]);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.board().legal_moves().len(), 8);
    }

    #[test]
    fn test_human_move_hands_turn_to_engine() {
        let mut session = GameSession::new(Player::X);
        session.place_human_mark(Position::new(1, 1)).unwrap();
        assert_eq!(session.phase(), SessionPhase::Thinking);

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        assert_eq!(sink.events, vec![SinkEvent::EngineMove(Position::new(0, 0))]);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn test_rejects_move_on_occupied_cell() {
        let mut session = GameSession::new(Player::X);
        session.place_human_mark(Position::new(1, 1)).unwrap();

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        // The engine took (0, 0) above.
        let err = session.place_human_mark(Position::new(0, 0)).unwrap_err();
        assert_eq!(err, "cell is already marked");
    }

    #[test]
    fn test_rejects_move_out_of_turn_and_out_of_bounds() {
        let mut session = GameSession::new(Player::X);
        assert!(session.place_human_mark(Position::new(3, 0)).is_err());

        session.place_human_mark(Position::new(1, 1)).unwrap();
        let err = session.place_human_mark(Position::new(0, 0)).unwrap_err();
        assert_eq!(err, "not your turn");
    }

    #[test]
    fn test_engine_turn_requires_thinking_phase() {
        let mut session = GameSession::new(Player::X);
        let mut sink = RecordingSink::default();
        assert!(session.play_engine_turn(&mut sink).is_err());
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_human_win_is_reported() {
        let board = Board::from_rows(["XX.", "OO.", "..."]);
        let mut session = GameSession::from_parts(board, Player::X, SessionPhase::Playing);
        session.place_human_mark(Position::new(2, 0)).unwrap();

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        assert_eq!(sink.events, vec![SinkEvent::PlayerWon(Player::X)]);
        assert_eq!(session.phase(), SessionPhase::Finished);
    }

    #[test]
    fn test_engine_win_is_reported_after_its_move() {
        let board = Board::from_rows(["XX.", "OO.", "X.."]);
        let mut session = GameSession::from_parts(board, Player::X, SessionPhase::Thinking);

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        assert_eq!(
            sink.events,
            vec![
                SinkEvent::EngineMove(Position::new(2, 1)),
                SinkEvent::EngineWon(Player::O),
            ]
        );
        assert_eq!(session.phase(), SessionPhase::Finished);
    }

    #[test]
    fn test_draw_is_reported_when_human_fills_the_board() {
        let board = Board::from_rows(["XOX", "XOO", "OX."]);
        let mut session = GameSession::from_parts(board, Player::X, SessionPhase::Playing);
        session.place_human_mark(Position::new(2, 2)).unwrap();

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        assert_eq!(sink.events, vec![SinkEvent::Draw]);
        assert_eq!(session.phase(), SessionPhase::Finished);
    }

    #[test]
    fn test_finished_game_rejects_moves_until_reset() {
        let board = Board::from_rows(["XX.", "OO.", "..."]);
        let mut session = GameSession::from_parts(board, Player::X, SessionPhase::Playing);
        session.place_human_mark(Position::new(2, 0)).unwrap();

        let mut sink = RecordingSink::default();
        session.play_engine_turn(&mut sink).unwrap();

        let err = session.place_human_mark(Position::new(2, 1)).unwrap_err();
        assert_eq!(err, "game is already over");

        session.reset();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.board().legal_moves().len(), 9);
    }
}
