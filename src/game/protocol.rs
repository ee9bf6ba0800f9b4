use serde::{Deserialize, Serialize};

use super::types::Orientation;

/// Outcome flag carried with every transmitted move. The sender evaluates
/// termination for the upcoming turn-holder before sending, so the peer does
/// not have to re-derive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Next,
    Finished,
}

/// One committed placement, as exchanged with the match framework. The same
/// shape travels in both directions; an incoming message is replayed through
/// the normal validation path, never applied blindly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveMessage {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub match_status: MatchStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, MatchPhase};

    #[test]
    fn test_move_message_wire_shape() {
        let message = MoveMessage {
            row: 2,
            col: 5,
            orientation: Orientation::Horizontal,
            match_status: MatchStatus::Next,
        };

        let yaml = serde_yaml_ng::to_string(&message).unwrap();

        assert!(yaml.contains("row: 2"));
        assert!(yaml.contains("col: 5"));
        assert!(yaml.contains("orientation: horizontal"));
        assert!(yaml.contains("matchStatus: next"));
    }

    #[test]
    fn test_move_message_deserializes_from_wire_names() {
        let yaml = "row: 1\ncol: 0\norientation: vertical\nmatchStatus: finished\n";

        let message: MoveMessage = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(message.row, 1);
        assert_eq!(message.col, 0);
        assert_eq!(message.orientation, Orientation::Vertical);
        assert_eq!(message.match_status, MatchStatus::Finished);
    }

    #[test]
    fn test_player_token_round_trip() {
        assert_eq!(
            Orientation::from_player_token("1"),
            Some(Orientation::Vertical)
        );
        assert_eq!(
            Orientation::from_player_token("2"),
            Some(Orientation::Horizontal)
        );
        assert_eq!(Orientation::from_player_token("3"), None);
        assert_eq!(Orientation::Vertical.player_token(), "1");
        assert_eq!(Orientation::Horizontal.player_token(), "2");
    }

    #[test]
    fn test_serialized_move_replays_to_identical_state() {
        let mut sender = GameState::new(8);
        sender.start_match(Orientation::Vertical);
        let mut receiver = GameState::new(8);
        receiver.start_match(Orientation::Horizontal);

        let outgoing = sender.submit_local_move(3, 3).unwrap();
        let wire = serde_yaml_ng::to_string(&outgoing).unwrap();
        let incoming: MoveMessage = serde_yaml_ng::from_str(&wire).unwrap();
        receiver.apply_remote_move(&incoming).unwrap();

        assert_eq!(receiver.phase(), sender.phase());
        assert_eq!(receiver.turn_orientation(), sender.turn_orientation());
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(receiver.cell_state(row, col), sender.cell_state(row, col));
            }
        }
    }

    #[test]
    fn test_finished_move_replays_to_finished_phase() {
        let mut sender = GameState::new(2);
        sender.start_match(Orientation::Vertical);
        let mut receiver = GameState::new(2);
        receiver.start_match(Orientation::Horizontal);

        let outgoing = sender.submit_local_move(0, 0).unwrap();
        assert_eq!(outgoing.match_status, MatchStatus::Finished);
        receiver.apply_remote_move(&outgoing).unwrap();

        assert_eq!(receiver.phase(), MatchPhase::Finished);
        assert_eq!(receiver.winner(), Some(Orientation::Vertical));
    }
}
