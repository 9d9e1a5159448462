//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::super::{MoveLog, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The log must show Player 1, Player 2, Player 1, ... in order.
/// The first move always belongs to Player 1.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveLog> for AlternatingTurnInvariant {
    fn holds(log: &MoveLog) -> bool {
        let moves = log.moves();

        if moves.is_empty() {
            return true;
        }

        if moves[0].player != Player::One {
            return false;
        }

        moves
            .windows(2)
            .all(|window| window[0].player != window[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns, Player 1 first"
    }
}
