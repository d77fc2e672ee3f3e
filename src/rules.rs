use strum::{EnumIter, IntoEnumIterator};

use crate::board::Board;
use crate::types::{Cell, Outcome, Player, Position};

/// The eight king-move compass directions a capture line can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// `(row_delta, col_delta)` unit step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Result of scanning a single direction from a candidate cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineResult {
    NoCapture,
    /// `count` opposing discs lie between the candidate cell and the
    /// terminating same-color disc.
    Capture { count: u32 },
}

/// One capturing direction of a move, with its opposing run length.
/// Transient: computed at legality-check time, consumed by the flip walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureLine {
    pub direction: Direction,
    pub count: u32,
}

/// Scans outward from `position` along `direction`. A capture requires a
/// contiguous run of one or more opposing discs starting immediately
/// adjacent, terminated by a disc of `player`'s color with no gap. An empty
/// cell, the board edge, or an immediately adjacent same-color disc all end
/// the scan without a capture.
pub fn scan_direction(
    board: &Board,
    player: Player,
    position: Position,
    direction: Direction,
) -> LineResult {
    let (dr, dc) = direction.delta();
    let mut row = position.row as i32 + dr;
    let mut col = position.col as i32 + dc;
    let mut count = 0;

    while board.in_bounds(row, col) {
        match board.get(row as usize, col as usize).player() {
            Some(p) if p == player.opponent() => count += 1,
            Some(_) if count > 0 => return LineResult::Capture { count },
            _ => break,
        }
        row += dr;
        col += dc;
    }

    LineResult::NoCapture
}

/// All capturing directions for placing `player` at `position`, in a fixed
/// compass order. Empty when the move is illegal (including a non-empty
/// target cell). Built fresh on every call.
pub fn capture_lines(board: &Board, player: Player, position: Position) -> Vec<CaptureLine> {
    if board.get(position.row as usize, position.col as usize) != Cell::Empty {
        return Vec::new();
    }

    Direction::iter()
        .filter_map(|direction| {
            match scan_direction(board, player, position, direction) {
                LineResult::Capture { count } => Some(CaptureLine { direction, count }),
                LineResult::NoCapture => None,
            }
        })
        .collect()
}

/// True iff the target cell is empty and at least one direction captures.
pub fn is_legal(board: &Board, player: Player, position: Position) -> bool {
    if board.get(position.row as usize, position.col as usize) != Cell::Empty {
        return false;
    }

    Direction::iter().any(|direction| {
        matches!(
            scan_direction(board, player, position, direction),
            LineResult::Capture { .. }
        )
    })
}

/// True iff any empty cell is a legal move for `player`. Scans row-major and
/// short-circuits on the first hit.
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    positions(board).any(|position| is_legal(board, player, position))
}

/// `Ongoing` while either color still has a legal move; otherwise a strict
/// disc-count comparison.
pub fn outcome(board: &Board) -> Outcome {
    if has_any_legal_move(board, Player::Black) || has_any_legal_move(board, Player::White) {
        return Outcome::Ongoing;
    }

    let (black, white) = board.count();
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::BlackWin,
        std::cmp::Ordering::Less => Outcome::WhiteWin,
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Places `player`'s disc at `position` and flips every captured run.
/// Caller contract: `is_legal(board, player, position)` holds; this does not
/// re-validate. Returns the flipped positions in flip order.
pub fn apply_move(board: &mut Board, player: Player, position: Position) -> Vec<Position> {
    let lines = capture_lines(board, player, position);
    debug_assert!(!lines.is_empty(), "apply_move() requires a legal move");

    board.set(position.row as usize, position.col as usize, player.cell());

    let mut flipped = Vec::new();
    for line in &lines {
        let (dr, dc) = line.direction.delta();
        let mut row = position.row as i32;
        let mut col = position.col as i32;
        for _ in 0..line.count {
            row += dr;
            col += dc;
            board.set(row as usize, col as usize, player.cell());
            flipped.push(Position::new(row as u8, col as u8));
        }
    }

    tracing::debug!(%player, %position, flipped = flipped.len(), "applied move");
    flipped
}

/// All board coordinates in row-major order.
pub fn positions(board: &Board) -> impl Iterator<Item = Position> + use<> {
    let size = board.size() as u8;
    (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
}
