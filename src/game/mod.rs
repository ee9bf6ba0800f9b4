mod board;
mod game_state;
mod protocol;
mod types;

pub use board::{available_moves, has_available_move, placement_fits};
pub use game_state::GameState;
pub use protocol::{MatchStatus, MoveMessage};
pub use types::{CellMark, MatchPhase, Orientation};
