use serde::{Deserialize, Serialize};

/// One tag, three roles: the marker written into occupied cells, the
/// identity of each player, and the turn-holder. Each role has its own
/// accessor so call sites never compare values across roles by accident.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn opponent(self) -> Orientation {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Role: cell marker. The mark this player's pieces leave on the board.
    pub fn mark(self) -> CellMark {
        match self {
            Orientation::Vertical => CellMark::Vertical,
            Orientation::Horizontal => CellMark::Horizontal,
        }
    }

    /// Role: participant token in the match framework's assignment message.
    /// Token "1" moves first, and vertical always moves first.
    pub fn player_token(self) -> &'static str {
        match self {
            Orientation::Vertical => "1",
            Orientation::Horizontal => "2",
        }
    }

    pub fn from_player_token(token: &str) -> Option<Orientation> {
        match token {
            "1" => Some(Orientation::Vertical),
            "2" => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMark {
    Empty,
    Vertical,
    Horizontal,
}

impl CellMark {
    pub fn is_empty(self) -> bool {
        self == CellMark::Empty
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    NoMatch,
    InProgress,
    Finished,
    Abandoned,
}
