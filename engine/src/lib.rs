pub mod board;
pub mod logger;
pub mod minimax;
pub mod session;
pub mod types;
pub mod win_detector;

pub use board::Board;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE, best_move};
pub use session::{GameSession, OutcomeSink, SessionPhase};
pub use types::{Cell, GRID_SIZE, GameOutcome, Player, Position, WinningLine};
pub use win_detector::classify;
