//! Rematch library - session-scored tic-tac-toe
//!
//! Two players share one keyboard and one board; the session keeps
//! score across as many rounds as they want to play.
//!
//! # Architecture
//!
//! - **Games**: the round core - an append-only move log, a pure
//!   outcome evaluator, and the session tally
//! - **Session**: one owner for a running match, the only place a
//!   finished round gets recorded
//! - **Tui**: interactive terminal shell over the session
//! - **Replay**: headless scripted rounds for piping and testing
//!
//! # Example
//!
//! ```
//! use rematch::{Cell, MatchSession, Player, Verdict};
//!
//! let mut session = MatchSession::new();
//! for digit in [1, 4, 2, 5, 3] {
//!     session.play(Cell::from_digit(digit).unwrap());
//! }
//!
//! assert_eq!(session.verdict(), Verdict::Won(Player::One));
//! assert_eq!(session.tally().wins(Player::One), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod games;
pub mod replay;
pub mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Match session
pub use session::MatchSession;

// Crate-level exports - Replay
pub use replay::{MoveScript, ReplayReport};

// Crate-level exports - Round core
pub use games::tictactoe::{
    evaluate, Cell, InvalidCell, InvalidPlayer, Move, MoveLog, Player, SessionTally, Verdict,
    WIN_PATTERNS,
};
