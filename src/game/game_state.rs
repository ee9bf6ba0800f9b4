use crate::log;

use super::board::{has_available_move, placement_fits};
use super::protocol::{MatchStatus, MoveMessage};
use super::types::{CellMark, MatchPhase, Orientation};

/// Authoritative Domineering game model: board occupancy, turn alternation
/// keyed by piece orientation, and termination detection. The single source
/// of truth for the match; the UI and the match transport only query it and
/// feed it events.
#[derive(Debug)]
pub struct GameState {
    board: Vec<Vec<CellMark>>,
    board_size: usize,
    local_orientation: Option<Orientation>,
    turn_orientation: Orientation,
    winner: Option<Orientation>,
    vertical_pieces: usize,
    horizontal_pieces: usize,
    phase: MatchPhase,
}

impl GameState {
    pub fn new(board_size: usize) -> Self {
        if board_size == 0 {
            panic!("Domineering requires a positive board size");
        }

        Self {
            board: vec![vec![CellMark::Empty; board_size]; board_size],
            board_size,
            local_orientation: None,
            turn_orientation: Orientation::Vertical,
            winner: None,
            vertical_pieces: 0,
            horizontal_pieces: 0,
            phase: MatchPhase::NoMatch,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Orientation> {
        self.winner
    }

    pub fn turn_orientation(&self) -> Orientation {
        self.turn_orientation
    }

    pub fn local_orientation(&self) -> Option<Orientation> {
        self.local_orientation
    }

    /// Number of pieces `orientation` has committed so far.
    pub fn move_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Vertical => self.vertical_pieces,
            Orientation::Horizontal => self.horizontal_pieces,
        }
    }

    /// Marker at (row, col). Callers are responsible for in-bounds
    /// coordinates; the presentation layer filters clicks and hovers through
    /// the pixel-to-cell mapping before they get here.
    pub fn cell_state(&self, row: usize, col: usize) -> CellMark {
        self.board[row][col]
    }

    /// Pure legality predicate: both cells of the piece in-bounds and empty.
    /// Valid in any phase, so the UI can drive previews with it.
    pub fn is_valid_placement(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        placement_fits(&self.board, row, col, orientation)
    }

    /// Commit a piece. Returns false and leaves the board untouched when the
    /// placement is illegal. Deliberately does not advance the turn: callers
    /// sequence validate, commit, termination check and turn switch
    /// explicitly so the outcome is known before it is transmitted.
    pub fn place_piece(&mut self, row: usize, col: usize, orientation: Orientation) -> bool {
        if !self.is_valid_placement(row, col, orientation) {
            return false;
        }

        let mark = orientation.mark();
        self.board[row][col] = mark;
        match orientation {
            Orientation::Vertical => {
                self.board[row + 1][col] = mark;
                self.vertical_pieces += 1;
            }
            Orientation::Horizontal => {
                self.board[row][col + 1] = mark;
                self.horizontal_pieces += 1;
            }
        }
        true
    }

    /// Hand the turn to the other orientation. A turn-holder with no legal
    /// placement is stuck and loses, so the mover who just placed wins. This
    /// is the only place `winner` and `Finished` are set during play.
    pub fn advance_turn(&mut self) {
        self.turn_orientation = self.turn_orientation.opponent();
        if self.is_game_over() {
            self.winner = Some(self.turn_orientation.opponent());
            self.phase = MatchPhase::Finished;
            log!("Game over, winner: {:?}", self.turn_orientation.opponent());
        }
    }

    /// True iff the current turn-holder has no legal placement left.
    pub fn is_game_over(&self) -> bool {
        !has_available_move(&self.board, self.turn_orientation)
    }

    pub fn is_local_turn(&self) -> bool {
        self.phase == MatchPhase::InProgress
            && self.local_orientation == Some(self.turn_orientation)
    }

    /// Match-assignment event from the transport: this client controls
    /// `local_orientation`, and vertical always opens. An assignment always
    /// begins from the pristine state, so a match arriving after a finished
    /// or abandoned one never inherits the old board.
    pub fn start_match(&mut self, local_orientation: Orientation) {
        self.restore_initial_state();
        self.local_orientation = Some(local_orientation);
        self.phase = MatchPhase::InProgress;
        log!("Match started, local player: {:?}", local_orientation);
    }

    /// Opponent-disconnect signal. Every later command is rejected by the
    /// phase gate until the state is restored.
    pub fn mark_abandoned(&mut self) {
        if self.phase == MatchPhase::InProgress {
            self.phase = MatchPhase::Abandoned;
            log!("Match abandoned by opponent");
        }
    }

    /// Reset the whole aggregate to its construction state, discarding all
    /// placements.
    pub fn restore_initial_state(&mut self) {
        self.board = vec![vec![CellMark::Empty; self.board_size]; self.board_size];
        self.local_orientation = None;
        self.turn_orientation = Orientation::Vertical;
        self.winner = None;
        self.vertical_pieces = 0;
        self.horizontal_pieces = 0;
        self.phase = MatchPhase::NoMatch;
        log!("Game state restored to initial");
    }

    /// Full local-move sequence for a resolved cell click: gate on turn
    /// ownership, commit, advance the turn, then build the message to send.
    /// The match status goes out already decided, so the peer never has to
    /// re-derive the outcome. `None` means the move was rejected and nothing
    /// changed.
    pub fn submit_local_move(&mut self, row: usize, col: usize) -> Option<MoveMessage> {
        if !self.is_local_turn() {
            return None;
        }
        let orientation = self.local_orientation?;
        if !self.place_piece(row, col, orientation) {
            return None;
        }

        self.advance_turn();

        let match_status = if self.phase == MatchPhase::Finished {
            MatchStatus::Finished
        } else {
            MatchStatus::Next
        };
        log!(
            "Local move committed at ({}, {}), status: {:?}",
            row,
            col,
            match_status
        );
        Some(MoveMessage {
            row,
            col,
            orientation,
            match_status,
        })
    }

    /// Replay a move received from the peer exactly as a local one: validate,
    /// commit, advance the turn. Remote input is never trusted; a message
    /// that is illegal against the local board (lost or reordered messages,
    /// a misbehaving peer) is rejected without touching the board, and the
    /// transport layer decides whether to resync or abort.
    pub fn apply_remote_move(&mut self, move_message: &MoveMessage) -> Result<(), String> {
        if self.phase != MatchPhase::InProgress {
            return Err("No match in progress".to_string());
        }
        if self.is_local_turn() {
            return Err("Received a remote move on the local turn".to_string());
        }
        if move_message.orientation != self.turn_orientation {
            return Err(format!(
                "Remote move orientation {:?} does not match turn-holder {:?}",
                move_message.orientation, self.turn_orientation
            ));
        }
        if !self.place_piece(move_message.row, move_message.col, move_message.orientation) {
            return Err(format!(
                "Remote move at ({}, {}) is not a valid placement",
                move_message.row, move_message.col
            ));
        }

        self.advance_turn();

        // Termination is re-derived locally; the transmitted status is only
        // cross-checked.
        let derived = if self.phase == MatchPhase::Finished {
            MatchStatus::Finished
        } else {
            MatchStatus::Next
        };
        if derived != move_message.match_status {
            log!(
                "Remote move status {:?} disagrees with derived {:?}",
                move_message.match_status,
                derived
            );
        }
        Ok(())
    }
}
