use super::types::{CellMark, Orientation};

/// True iff a domino of `orientation` anchored at (row, col) fits: the anchor
/// and its second cell (below for vertical, to the right for horizontal) are
/// both on the board and both empty.
pub fn placement_fits(
    board: &[Vec<CellMark>],
    row: usize,
    col: usize,
    orientation: Orientation,
) -> bool {
    let size = board.len();
    if row >= size || col >= size {
        return false;
    }

    let (second_row, second_col) = match orientation {
        Orientation::Vertical => (row + 1, col),
        Orientation::Horizontal => (row, col + 1),
    };
    if second_row >= size || second_col >= size {
        return false;
    }

    board[row][col].is_empty() && board[second_row][second_col].is_empty()
}

/// Anchor cells of every legal placement for `orientation`.
pub fn available_moves(board: &[Vec<CellMark>], orientation: Orientation) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for row in 0..board.len() {
        for col in 0..board.len() {
            if placement_fits(board, row, col, orientation) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Early-exit variant used by the termination check.
pub fn has_available_move(board: &[Vec<CellMark>], orientation: Orientation) -> bool {
    for row in 0..board.len() {
        for col in 0..board.len() {
            if placement_fits(board, row, col, orientation) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(size: usize) -> Vec<Vec<CellMark>> {
        vec![vec![CellMark::Empty; size]; size]
    }

    #[test]
    fn test_empty_board_has_moves_for_both_orientations() {
        let board = empty_board(4);

        assert!(has_available_move(&board, Orientation::Vertical));
        assert!(has_available_move(&board, Orientation::Horizontal));
    }

    #[test]
    fn test_vertical_anchor_excluded_from_last_row() {
        let board = empty_board(3);

        let moves = available_moves(&board, Orientation::Vertical);

        // 2 anchor rows x 3 columns
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|&(row, _)| row < 2));
    }

    #[test]
    fn test_horizontal_anchor_excluded_from_last_column() {
        let board = empty_board(3);

        let moves = available_moves(&board, Orientation::Horizontal);

        assert_eq!(moves.len(), 6);
        assert!(moves.iter().all(|&(_, col)| col < 2));
    }

    #[test]
    fn test_placement_fits_rejects_occupied_second_cell() {
        let mut board = empty_board(3);
        board[1][0] = CellMark::Horizontal;

        assert!(!placement_fits(&board, 0, 0, Orientation::Vertical));
        assert!(placement_fits(&board, 0, 0, Orientation::Horizontal));
    }

    #[test]
    fn test_placement_fits_rejects_out_of_bounds_anchor() {
        let board = empty_board(3);

        assert!(!placement_fits(&board, 3, 0, Orientation::Vertical));
        assert!(!placement_fits(&board, 0, 3, Orientation::Horizontal));
    }

    #[test]
    fn test_single_free_column_blocks_horizontal() {
        // Only column 1 free on a 2x2 board: vertical still fits there,
        // horizontal cannot pair across the board edge.
        let mut board = empty_board(2);
        board[0][0] = CellMark::Vertical;
        board[1][0] = CellMark::Vertical;

        assert!(has_available_move(&board, Orientation::Vertical));
        assert!(!has_available_move(&board, Orientation::Horizontal));
    }
}
