//! Property tests over the round core.

use super::log::MoveLog;
use super::rules::evaluate;
use super::types::{Cell, Player, Verdict};
use proptest::prelude::*;

/// All nine cells in a random order.
fn shuffled_cells() -> impl Strategy<Value = Vec<Cell>> {
    let cells: Vec<Cell> = (1..=9).filter_map(Cell::from_digit).collect();
    Just(cells).prop_shuffle()
}

/// A prefix of a shuffled board: unique cells, any length 0-9.
fn unique_cells() -> impl Strategy<Value = Vec<Cell>> {
    (shuffled_cells(), 0usize..=9).prop_map(|(cells, len)| cells[..len].to_vec())
}

proptest! {
    /// Playing until the round completes always lands in a coherent
    /// verdict: wins need at least five moves, ties need a full board,
    /// and an unfinished board stays in progress.
    #[test]
    fn legal_rounds_end_coherently(cells in shuffled_cells()) {
        let mut log = MoveLog::new();
        for &cell in &cells {
            if evaluate(log.moves()).is_over() {
                break;
            }
            log.append(cell);
        }

        match evaluate(log.moves()) {
            Verdict::Won(_) => prop_assert!(log.len() >= 5),
            Verdict::Tie => prop_assert_eq!(log.len(), 9),
            Verdict::InProgress => prop_assert!(log.len() < 9),
        }
    }

    /// The evaluator is total and pure: any move list, including ones
    /// that keep playing past a win, gets a verdict, and evaluating
    /// twice gives the same answer.
    #[test]
    fn evaluation_is_total_and_idempotent(cells in unique_cells()) {
        let mut log = MoveLog::new();
        for &cell in &cells {
            log.append(cell);
        }

        let first = evaluate(log.moves());
        let second = evaluate(log.moves());
        prop_assert_eq!(first, second);

        if log.len() == 9 {
            prop_assert!(first.is_over());
        }
    }

    /// Appends alternate players starting from Player 1, whatever
    /// cells arrive in whatever order.
    #[test]
    fn appends_alternate_players(cells in unique_cells()) {
        let mut log = MoveLog::new();
        for &cell in &cells {
            log.append(cell);
        }

        let moves = log.moves();
        if let Some(first) = moves.first() {
            prop_assert_eq!(first.player, Player::One);
        }
        for window in moves.windows(2) {
            prop_assert_eq!(window[1].player, window[0].player.opponent());
        }
    }

    /// Replaying every already-claimed cell is a no-op: same length,
    /// same occupants, same verdict.
    #[test]
    fn duplicate_claims_change_nothing(cells in unique_cells()) {
        let mut log = MoveLog::new();
        for &cell in &cells {
            log.append(cell);
        }

        let before = log.clone();
        let verdict = evaluate(log.moves());
        for &cell in &cells {
            prop_assert!(log.append(cell).is_none());
        }

        prop_assert_eq!(&log, &before);
        prop_assert_eq!(evaluate(log.moves()), verdict);
    }
}
