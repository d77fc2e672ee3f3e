use std::fmt;

use derive_more::{Display, Error};
use serde::Serialize;

/// A disc color. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Single-letter form used in prompts and transcripts.
    pub fn glyph(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// One square of the grid: 'U' (unoccupied), 'B' or 'W' in transcripts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => 'U',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// A zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    /// Two-letter form ("cd" = row 2, col 3), matching move input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'a' + self.row) as char;
        let col = (b'a' + self.col) as char;
        write!(f, "{row}{col}")
    }
}

/// Game classification, recomputed on demand from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Ongoing,
    BlackWin,
    WhiteWin,
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display("board dimension must be an even number between 3 and 26, got {size}")]
    InvalidDimension { size: usize },
    #[display("move {position} is illegal for {player}")]
    IllegalMove { player: Player, position: Position },
    #[display("{player} has no legal move to select")]
    NoLegalMove { player: Player },
    #[display("game is already over")]
    GameOver,
}

/// Snapshot of a game, suitable for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub size: usize,
    /// One string per row, cells as 'U'/'B'/'W' glyphs.
    pub board: Vec<String>,
    pub current_player: Player,
    pub black_count: u32,
    pub white_count: u32,
    pub outcome: Outcome,
    /// Contract:
    /// - Normal move: list of positions flipped by the last move.
    /// - Pass or fresh game: must be an empty list.
    pub flipped: Vec<Position>,
}
