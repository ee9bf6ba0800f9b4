pub mod game;
pub mod logger;
pub mod settings;

pub use game::{CellMark, GameState, MatchPhase, MatchStatus, MoveMessage, Orientation};
pub use settings::GameSettings;
