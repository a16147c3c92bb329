//! Core value types shared across the engine: cell colors, players, and moves.

use std::fmt;

/// The color a cell on the board can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Empty,
    Red,
    Black,
}

/// One of the two players. Carries its stone color and a stable integer
/// id (1 for Red, 2 for Black) used by `Node::player_that_moved` and by
/// `GameState::winner_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub fn stone(self) -> Color {
        match self {
            Player::Red => Color::Red,
            Player::Black => Color::Black,
        }
    }

    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Black => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A move onto a single board cell, addressed by (row, col).
///
/// Rows/columns are signed so that heuristics can be evaluated against
/// synthetically out-of-bounds moves (see the centrality heuristic's
/// documented negative-score behavior for inputs outside the board).
/// `Move` is a plain `Copy` value, cheap to use as a `HashMap` key and to
/// compare, which is all the interning a move representation needs here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub fn new(row: i32, col: i32) -> Move {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
