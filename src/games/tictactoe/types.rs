//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Player in the game.
///
/// Player 1 opens every round and marks `X`; Player 2 marks `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// The opening player (mark X).
    #[display("Player 1")]
    One,
    /// The second player (mark O).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Stable numeric id, `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The mark this player places on the board.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.number()
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayer;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(InvalidPlayer { number }),
        }
    }
}

/// A cell on the 3x3 board.
///
/// Variants are laid out in row-major order with stable digit ids:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    /// Digit 1.
    TopLeft,
    /// Digit 2.
    TopCenter,
    /// Digit 3.
    TopRight,
    /// Digit 4.
    MiddleLeft,
    /// Digit 5.
    Center,
    /// Digit 6.
    MiddleRight,
    /// Digit 7.
    BottomLeft,
    /// Digit 8.
    BottomCenter,
    /// Digit 9.
    BottomRight,
}

impl Cell {
    /// The board rows in display order, used by renderers.
    pub const ROWS: [[Cell; 3]; 3] = [
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    ];

    /// Digit id of this cell, `1`-`9`.
    pub fn digit(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a cell by its digit id.
    pub fn from_digit(digit: u8) -> Option<Cell> {
        Cell::iter().find(|cell| cell.digit() == digit)
    }

    /// Human-readable label for this cell.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "top-left",
            Cell::TopCenter => "top-center",
            Cell::TopRight => "top-right",
            Cell::MiddleLeft => "middle-left",
            Cell::Center => "center",
            Cell::MiddleRight => "middle-right",
            Cell::BottomLeft => "bottom-left",
            Cell::BottomCenter => "bottom-center",
            Cell::BottomRight => "bottom-right",
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.digit()
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCell;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        Cell::from_digit(digit).ok_or(InvalidCell { digit })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A move: a player claiming a cell, permanent for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The claimed cell.
    pub cell: Cell,
    /// The player who claimed it.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(cell: Cell, player: Player) -> Self {
        Self { cell, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Outcome of evaluating a move log.
///
/// A winner only exists on a finished round, so "complete with a
/// winner" and "complete without one" are separate variants rather
/// than a status flag sitting next to an optional player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The round is still accepting moves.
    InProgress,
    /// A player owns a full winning pattern.
    Won(Player),
    /// All nine cells are filled and nobody won.
    Tie,
}

impl Verdict {
    /// True once the round has completed, by win or by tie.
    pub fn is_over(self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// The winning player, if the round was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            Verdict::Won(player) => Some(player),
            Verdict::InProgress | Verdict::Tie => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "round in progress"),
            Verdict::Won(player) => write!(f, "{player} wins!"),
            Verdict::Tie => write!(f, "Tie!"),
        }
    }
}

/// Error for cell digits outside `1`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid cell digit {digit}, expected 1-9")]
pub struct InvalidCell {
    /// The rejected digit.
    pub digit: u8,
}

/// Error for player numbers other than `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid player number {number}, expected 1 or 2")]
pub struct InvalidPlayer {
    /// The rejected number.
    pub number: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponents_are_symmetric() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn cell_digits_cover_one_through_nine() {
        let digits: Vec<u8> = Cell::iter().map(Cell::digit).collect();
        assert_eq!(digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn cell_digit_roundtrip() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_digit(cell.digit()), Some(cell));
        }
        assert_eq!(Cell::from_digit(0), None);
        assert_eq!(Cell::from_digit(10), None);
    }

    #[test]
    fn out_of_range_ids_are_rejected() {
        assert_eq!(Cell::try_from(0), Err(InvalidCell { digit: 0 }));
        assert_eq!(Player::try_from(3), Err(InvalidPlayer { number: 3 }));
    }

    #[test]
    fn moves_serialize_as_ids() {
        let mv = Move::new(Cell::TopLeft, Player::One);
        let json = serde_json::to_string(&mv).expect("serialize");
        assert_eq!(json, r#"{"cell":1,"player":1}"#);
        let back: Move = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, mv);
    }

    #[test]
    fn verdict_accessors_match_variants() {
        assert!(!Verdict::InProgress.is_over());
        assert!(Verdict::Won(Player::Two).is_over());
        assert!(Verdict::Tie.is_over());
        assert_eq!(Verdict::Won(Player::One).winner(), Some(Player::One));
        assert_eq!(Verdict::Tie.winner(), None);
        assert_eq!(Verdict::InProgress.winner(), None);
    }
}
