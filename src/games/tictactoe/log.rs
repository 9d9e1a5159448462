//! Append-only move log, the single source of truth for a round.

#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, MoveLogInvariants};
use super::types::{Cell, Move, Player};
use tracing::{debug, instrument};

/// Ordered record of the moves played this round.
///
/// Everything else about a round is derived from the log on demand:
/// board occupancy, the player to move, and (through the evaluator)
/// the outcome. Nothing derived is stored next to it, so the views
/// can never drift out of sync with the moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Appends a move claiming `cell` for the player whose turn it is.
    ///
    /// A claim on an occupied cell is ignored: the log stays unchanged
    /// and `None` is returned. Duplicate submissions are tolerated
    /// rather than surfaced as errors, so callers can forward raw
    /// input without filtering it first.
    #[instrument(skip(self), fields(cell = cell.digit()))]
    pub fn append(&mut self, cell: Cell) -> Option<Move> {
        if self.occupant(cell).is_some() {
            debug!("cell already taken, ignoring");
            return None;
        }

        let mv = Move::new(cell, self.next_player());
        self.moves.push(mv);
        debug!(%mv, "move appended");

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveLogInvariants::check_all(self) {
            panic!("move log invariants violated: {violations:?}");
        }

        Some(mv)
    }

    /// Clears the log for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.moves.clear();
    }

    /// The player whose turn it is, derived from the log.
    ///
    /// Player 1 opens; afterwards the mover is always the opponent of
    /// the last move's player. Deriving this on demand keeps the turn
    /// indicator and [`append`](Self::append) from ever disagreeing.
    pub fn next_player(&self) -> Player {
        match self.moves.last() {
            None => Player::One,
            Some(last) => last.player.opponent(),
        }
    }

    /// The player occupying `cell`, if any.
    pub fn occupant(&self, cell: Cell) -> Option<Player> {
        self.moves
            .iter()
            .find(|mv| mv.cell == cell)
            .map(|mv| mv.player)
    }

    /// Board occupancy derived from the log, indexed in row-major
    /// order (cell digit minus one).
    pub fn grid(&self) -> [Option<Player>; 9] {
        let mut cells = [None; 9];
        for mv in &self.moves {
            cells[(mv.cell.digit() - 1) as usize] = Some(mv.player);
        }
        cells
    }

    /// The moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves played this round.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// True if no moves have been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
