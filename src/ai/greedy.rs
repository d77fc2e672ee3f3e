use crate::board::Board;
use crate::game::MoveSelector;
use crate::rules::{self, capture_lines};
use crate::types::{Cell, Player, Position};

/// The fixed automated-opponent policy: take the move that flips the most
/// opposing discs right now.
///
/// Scans empty cells in row-major order and keeps a candidate only when its
/// capture total is strictly greater than the best seen, so the first cell
/// encountered among ties wins (lowest row, then lowest column).
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl MoveSelector for GreedySelector {
    fn select_move(&self, board: &Board, player: Player) -> Option<Position> {
        let mut best: Option<Position> = None;
        let mut best_captured = 0u32;

        for position in rules::positions(board) {
            if board.get(position.row as usize, position.col as usize) != Cell::Empty {
                continue;
            }

            let captured: u32 = capture_lines(board, player, position)
                .iter()
                .map(|line| line.count)
                .sum();

            if captured > best_captured {
                best_captured = captured;
                best = Some(position);
            }
        }

        // None when nothing captures: a zero-capture placement is not a
        // legal move, so there is no degenerate fallback coordinate.
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_largest_capture_even_when_it_comes_later() {
        let board = Board::from_glyph_rows(&[
            "UWBUUU", //
            "UUUUUU", //
            "UWWWWB", //
            "UUUUUU", //
            "UUUUUU", //
            "UUUUUU",
        ]);

        // (0,0) captures one disc, (2,0) captures four.
        let position = GreedySelector.select_move(&board, Player::Black);

        assert_eq!(position, Some(Position::new(2, 0)));
    }

    #[test]
    fn ties_go_to_the_first_cell_in_row_major_order() {
        let board = Board::new(8).unwrap();

        // All four opening moves for Black capture exactly one disc.
        let position = GreedySelector.select_move(&board, Player::Black);

        assert_eq!(position, Some(Position::new(2, 3)));
    }

    #[test]
    fn sums_captures_across_directions() {
        let board = Board::from_glyph_rows(&[
            "UWBU", //
            "WUUU", //
            "BUUU", //
            "UUUU",
        ]);

        // (0,0) captures east and south, one disc each.
        let lines = capture_lines(&board, Player::Black, Position::new(0, 0));
        assert_eq!(lines.iter().map(|line| line.count).sum::<u32>(), 2);

        let position = GreedySelector.select_move(&board, Player::Black);
        assert_eq!(position, Some(Position::new(0, 0)));
    }

    #[test]
    fn returns_none_when_nothing_captures() {
        let board = Board::from_glyph_rows(&[
            "BUUU", //
            "UUUU", //
            "UUUU", //
            "UUUU",
        ]);

        assert_eq!(GreedySelector.select_move(&board, Player::White), None);
        assert_eq!(GreedySelector.select_move(&board, Player::Black), None);
    }
}
