//! Board module - the grid of locked cells
//!
//! The board is a width x height grid in flat row-major storage (index
//! `y * width + x`), with dimensions fixed for the session but chosen at
//! construction from the config. Coordinates: x ranges left to right,
//! y top to bottom.
//!
//! The board never holds the falling piece. Placement checks take the piece
//! as an argument, and cells only become occupied through [`Board::commit`].
//! Rows with `y < 0` are the spawn buffer: cells up there are always legal
//! and are simply discarded on commit.

use std::error::Error;
use std::fmt;

use pentris_types::Cell;

use crate::piece::Piece;

/// Typed failures at the board boundary
///
/// Per-move legality is never an error - it is the boolean result of
/// [`Board::is_placement_valid`]. These variants cover the two real
/// failure modes: a row query outside the grid, and a commit that the
/// state machine should have made impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row index outside `[0, height)`
    OutOfRange { row: i32, height: u32 },
    /// Commit attempted for a piece that fails placement validation
    IllegalPlacement,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { row, height } => {
                write!(f, "row {row} outside board of height {height}")
            }
            BoardError::IllegalPlacement => {
                write!(f, "piece placement is not valid for commit")
            }
        }
    }
}

impl Error for BoardError {}

/// The playing-field grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    /// Flat row-major cells, `y * width + x`
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `(x, y)`; returns false when out of bounds
    ///
    /// Gameplay only mutates cells through [`Board::commit`] and row
    /// clearing; this exists for hosts and tests that set up positions.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `(x, y)` is inside the playable area
    ///
    /// There is deliberately no lower bound on `y`: pieces legitimately
    /// occupy rows above the visible field while spawning in.
    pub fn is_on_board(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Whether every cell of row `y` is occupied
    ///
    /// Fails with [`BoardError::OutOfRange`] for rows outside `[0, height)`.
    pub fn is_row_full(&self, y: i32) -> Result<bool, BoardError> {
        if y < 0 || y >= self.height as i32 {
            return Err(BoardError::OutOfRange {
                row: y,
                height: self.height,
            });
        }
        Ok(self.row_full_unchecked(y as usize))
    }

    fn row_full_unchecked(&self, y: usize) -> bool {
        let start = y * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every completed row and compact the rest downwards
    ///
    /// Single atomic pass: non-full rows are rewritten bottom-up in their
    /// original order, then the freed rows at the top are emptied. Returns
    /// the number of rows cleared. Calling it again with no intervening
    /// commit returns 0.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.row_full_unchecked(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Whether the piece may occupy its current position
    ///
    /// Every filled template cell must land on the board in an empty grid
    /// cell. Cells that resolve to a negative row are exempt from both
    /// checks - they are still in the spawn buffer.
    pub fn is_placement_valid(&self, piece: &Piece) -> bool {
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            if !self.is_on_board(x, y) {
                return false;
            }
            if matches!(self.get(x, y), Some(Some(_))) {
                return false;
            }
        }
        true
    }

    /// Burn the piece's cells into the grid
    ///
    /// Fails with [`BoardError::IllegalPlacement`] when the piece is not
    /// valid at its current position. Cells still above the visible field
    /// are discarded. This is the only way cells become occupied during
    /// play.
    pub fn commit(&mut self, piece: &Piece) -> Result<(), BoardError> {
        if !self.is_placement_valid(piece) {
            return Err(BoardError::IllegalPlacement);
        }
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            self.set(x, y, Some(piece.color));
        }
        Ok(())
    }

    /// All cells in row-major order, for renderers
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Encode the grid into `out` as one byte per cell
    ///
    /// 0 is empty; occupied cells encode as `1 + color index`. `out` is
    /// cleared and refilled, so a host can reuse one buffer across ticks.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| match cell {
            None => 0,
            Some(color) => 1 + color.index(),
        }));
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShapeCatalog;
    use pentris_types::{MinoColor, ShapeId};

    fn board() -> Board {
        Board::new(12, 20)
    }

    fn piece_at(id: ShapeId, x: i32, y: i32) -> Piece {
        Piece::new(ShapeCatalog::standard().get(id), MinoColor::Red, x, y)
    }

    fn fill_row(board: &mut Board, y: i32) {
        for x in 0..board.width() as i32 {
            board.set(x, y, Some(MinoColor::Blue));
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = board();
        assert_eq!(board.width(), 12);
        assert_eq!(board.height(), 20);
        assert!(board.cells().iter().all(|cell| cell.is_none()));
    }

    #[test]
    fn get_and_set_round_trip() {
        let mut board = board();
        assert!(board.set(5, 10, Some(MinoColor::Lime)));
        assert_eq!(board.get(5, 10), Some(Some(MinoColor::Lime)));
        assert!(board.set(5, 10, None));
        assert_eq!(board.get(5, 10), Some(None));
    }

    #[test]
    fn set_rejects_out_of_bounds() {
        let mut board = board();
        assert!(!board.set(-1, 0, Some(MinoColor::Red)));
        assert!(!board.set(0, 20, Some(MinoColor::Red)));
        assert!(!board.set(12, 0, Some(MinoColor::Red)));
    }

    #[test]
    fn is_on_board_has_no_lower_y_bound() {
        let board = board();
        assert!(board.is_on_board(0, -5));
        assert!(board.is_on_board(11, 19));
        assert!(!board.is_on_board(-1, 5));
        assert!(!board.is_on_board(12, 5));
        assert!(!board.is_on_board(5, 20));
    }

    #[test]
    fn is_row_full_rejects_out_of_range_rows() {
        let board = board();
        assert_eq!(
            board.is_row_full(-1),
            Err(BoardError::OutOfRange { row: -1, height: 20 })
        );
        assert_eq!(
            board.is_row_full(20),
            Err(BoardError::OutOfRange { row: 20, height: 20 })
        );
        assert_eq!(board.is_row_full(0), Ok(false));
    }

    #[test]
    fn is_row_full_detects_a_filled_row() {
        let mut board = board();
        fill_row(&mut board, 19);
        assert_eq!(board.is_row_full(19), Ok(true));
        board.set(0, 19, None);
        assert_eq!(board.is_row_full(19), Ok(false));
    }

    #[test]
    fn placement_valid_on_empty_board() {
        let board = board();
        let piece = piece_at(ShapeId::T, 3, 5);
        assert!(board.is_placement_valid(&piece));
    }

    #[test]
    fn placement_invalid_past_walls_and_floor() {
        let board = board();
        // X template fills columns 1..=3 of a 5-wide template.
        let mut piece = piece_at(ShapeId::X, -2, 5);
        assert!(!board.is_placement_valid(&piece));
        piece.x = 10;
        assert!(!board.is_placement_valid(&piece));
        piece.x = 3;
        piece.y = 18;
        assert!(!board.is_placement_valid(&piece));
    }

    #[test]
    fn placement_invalid_on_occupied_cell() {
        let mut board = board();
        board.set(3, 6, Some(MinoColor::White));
        let piece = piece_at(ShapeId::X, 1, 5);
        assert!(!board.is_placement_valid(&piece));
    }

    #[test]
    fn negative_rows_are_exempt_from_checks() {
        let board = board();
        // Vertical I at y = -4: four cells above the field, one at row 0.
        let mut piece = piece_at(ShapeId::I, 3, -4);
        piece.rotate_cw();
        assert!(board.is_placement_valid(&piece));
    }

    #[test]
    fn commit_writes_color_and_rejects_invalid() {
        let mut board = board();
        let piece = piece_at(ShapeId::X, 2, 4);
        assert_eq!(board.commit(&piece), Ok(()));
        assert_eq!(board.get(4, 5), Some(Some(MinoColor::Red)));

        // Committing again overlaps the first copy.
        assert_eq!(board.commit(&piece), Err(BoardError::IllegalPlacement));
    }

    #[test]
    fn commit_discards_spawn_buffer_cells() {
        let mut board = board();
        let mut piece = piece_at(ShapeId::I, 3, -3);
        piece.rotate_cw();
        assert_eq!(board.commit(&piece), Ok(()));
        // Only the two bottom cells of the vertical bar reached the grid.
        assert_eq!(board.get(4, 0), Some(Some(MinoColor::Red)));
        assert_eq!(board.get(4, 1), Some(Some(MinoColor::Red)));
        assert_eq!(board.get(4, 2), Some(None));
    }

    #[test]
    fn clear_completed_rows_compacts_and_preserves_order() {
        let mut board = board();
        fill_row(&mut board, 15);
        fill_row(&mut board, 18);
        board.set(0, 14, Some(MinoColor::Purple));
        board.set(0, 17, Some(MinoColor::Yellow));

        assert_eq!(board.clear_completed_rows(), 2);

        // Purple was above both cleared rows, yellow above one.
        assert_eq!(board.get(0, 16), Some(Some(MinoColor::Purple)));
        assert_eq!(board.get(0, 18), Some(Some(MinoColor::Yellow)));
        // Top two rows freed.
        for y in 0..2 {
            for x in 0..12 {
                assert_eq!(board.get(x, y), Some(None));
            }
        }
    }

    #[test]
    fn clear_completed_rows_is_idempotent_per_call() {
        let mut board = board();
        fill_row(&mut board, 19);
        assert_eq!(board.clear_completed_rows(), 1);
        assert_eq!(board.clear_completed_rows(), 0);
    }

    #[test]
    fn write_u8_grid_encodes_colors() {
        let mut board = Board::new(3, 2);
        board.set(1, 0, Some(MinoColor::Aqua));
        board.set(2, 1, Some(MinoColor::Yellow));
        let mut out = Vec::new();
        board.write_u8_grid(&mut out);
        assert_eq!(out, vec![0, 1, 0, 0, 0, 12]);
    }

    #[test]
    fn board_error_displays() {
        let err = BoardError::OutOfRange { row: 25, height: 20 };
        assert_eq!(err.to_string(), "row 25 outside board of height 20");
        assert_eq!(
            BoardError::IllegalPlacement.to_string(),
            "piece placement is not valid for commit"
        );
    }
}
