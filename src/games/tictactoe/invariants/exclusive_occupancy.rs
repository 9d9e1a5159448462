//! Exclusive occupancy invariant: each cell is claimed at most once.

use super::super::MoveLog;
use super::Invariant;

/// Invariant: No cell appears twice in the log.
///
/// A claimed cell belongs to its player for the rest of the round, so
/// a well-formed log never names the same cell in two moves.
pub struct ExclusiveOccupancyInvariant;

impl Invariant<MoveLog> for ExclusiveOccupancyInvariant {
    fn holds(log: &MoveLog) -> bool {
        let moves = log.moves();

        moves.iter().enumerate().all(|(index, mv)| {
            moves[..index].iter().all(|earlier| earlier.cell != mv.cell)
        })
    }

    fn description() -> &'static str {
        "Each cell is claimed at most once per round"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, MoveLog};

    #[test]
    fn test_empty_log_holds() {
        let log = MoveLog::new();
        assert!(ExclusiveOccupancyInvariant::holds(&log));
    }

    #[test]
    fn test_distinct_cells_hold() {
        let mut log = MoveLog::new();
        for cell in [Cell::TopLeft, Cell::Center, Cell::BottomRight] {
            log.append(cell);
        }

        assert!(ExclusiveOccupancyInvariant::holds(&log));
    }

    #[test]
    fn test_duplicate_append_is_rejected_upstream() {
        let mut log = MoveLog::new();
        log.append(Cell::Center);
        // The log refuses the duplicate, keeping the invariant intact.
        assert!(log.append(Cell::Center).is_none());

        assert!(ExclusiveOccupancyInvariant::holds(&log));
        assert_eq!(log.len(), 1);
    }
}
