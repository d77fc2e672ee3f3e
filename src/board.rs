use std::fmt;

use crate::types::{Cell, GameError};

/// Smallest and largest supported board dimension. The dimension must also
/// be even so the four starting discs sit in the exact center.
pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 26;

/// An owned n×n grid of cells. The dimension is fixed at construction.
///
/// Out-of-range access through [`Board::get`] or [`Board::set`] is a
/// programming error and panics; callers gate on [`Board::in_bounds`] first.
/// Only the flip resolver in [`crate::rules`] mutates the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of the given dimension with the standard opening:
    /// White at (n/2-1, n/2-1) and (n/2, n/2), Black on the other diagonal.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) || size % 2 != 0 {
            return Err(GameError::InvalidDimension { size });
        }

        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };

        let mid = size / 2;
        board.set(mid - 1, mid - 1, Cell::White);
        board.set(mid, mid, Cell::White);
        board.set(mid - 1, mid, Cell::Black);
        board.set(mid, mid - 1, Cell::Black);

        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= row < n` and `0 <= col < n`. Signed arguments so that
    /// direction scans can step past the edge and notice.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        (black, white)
    }

    pub fn empty_count(&self) -> u32 {
        let (black, white) = self.count();
        (self.size * self.size) as u32 - black - white
    }

    /// One string per row, cells rendered as 'U'/'B'/'W' glyphs.
    pub fn glyph_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| (0..self.size).map(|col| self.get(row, col).glyph()).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for a {n}x{n} board",
            n = self.size,
        );
        row * self.size + col
    }

    #[cfg(test)]
    pub(crate) fn from_glyph_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.len() == size), "board must be square");

        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|glyph| match glyph {
                'U' => Cell::Empty,
                'B' => Cell::Black,
                'W' => Cell::White,
                other => panic!("unknown cell glyph {other:?}"),
            })
            .collect();

        Self { size, cells }
    }
}

impl fmt::Display for Board {
    /// Transcript format: a column-letter header, then one letter-labelled
    /// row of glyphs per board row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for (row, glyphs) in self.glyph_rows().iter().enumerate() {
            writeln!(f, "{} {glyphs}", (b'a' + row as u8) as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_places_four_center_discs() {
        let board = Board::new(4).unwrap();

        assert_eq!(board.get(1, 1), Cell::White);
        assert_eq!(board.get(2, 2), Cell::White);
        assert_eq!(board.get(1, 2), Cell::Black);
        assert_eq!(board.get(2, 1), Cell::Black);
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 12);
    }

    #[test]
    fn standard_board_matches_othello_opening() {
        let board = Board::new(8).unwrap();

        assert_eq!(board.get(3, 3), Cell::White);
        assert_eq!(board.get(4, 4), Cell::White);
        assert_eq!(board.get(3, 4), Cell::Black);
        assert_eq!(board.get(4, 3), Cell::Black);
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn odd_and_out_of_range_dimensions_are_rejected() {
        for size in [0, 2, 5, 7, 27, 28] {
            assert_eq!(
                Board::new(size).unwrap_err(),
                GameError::InvalidDimension { size }
            );
        }
        assert!(Board::new(26).is_ok());
    }

    #[test]
    fn in_bounds_matches_dimension() {
        let board = Board::new(6).unwrap();

        assert!(board.in_bounds(0, 0));
        assert!(board.in_bounds(5, 5));
        assert!(!board.in_bounds(-1, 0));
        assert!(!board.in_bounds(0, 6));
        assert!(!board.in_bounds(6, 3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_get_is_fatal() {
        let board = Board::new(4).unwrap();
        board.get(4, 0);
    }

    #[test]
    fn display_uses_letter_headers_and_glyphs() {
        let board = Board::new(4).unwrap();
        let expected = "  abcd\n\
                        a UUUU\n\
                        b UWBU\n\
                        c UBWU\n\
                        d UUUU\n";

        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn glyph_rows_round_trip_through_test_parser() {
        let rows = ["UUUU", "UWBU", "UBWU", "UUUU"];
        let board = Board::from_glyph_rows(&rows);

        assert_eq!(board.glyph_rows(), rows);
        assert_eq!(board, Board::new(4).unwrap());
    }
}
