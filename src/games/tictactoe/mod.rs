//! Tic-tac-toe round core: move log, outcome evaluator, and tally.

pub mod invariants;
mod log;
mod rules;
mod tally;
mod types;

#[cfg(test)]
mod proptests;

pub use log::MoveLog;
pub use rules::{evaluate, WIN_PATTERNS};
pub use tally::SessionTally;
pub use types::{Cell, InvalidCell, InvalidPlayer, Move, Player, Verdict};
