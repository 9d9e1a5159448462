//! Round evaluation rules for tic-tac-toe.

use super::types::{Cell, Move, Player, Verdict};
use tracing::instrument;

/// The eight winning patterns: three rows, three columns, two
/// diagonals, in that order.
pub const WIN_PATTERNS: [[Cell; 3]; 8] = [
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Evaluates a move log and reports the round outcome.
///
/// Pure over its input: the same moves always yield the same verdict,
/// regardless of how many times or in what order rounds are evaluated.
/// A player wins when their claimed cells cover a full winning
/// pattern; nine moves with no winner is a tie; anything else is still
/// in progress.
///
/// Every pattern is scanned even after a match. On well-formed logs at
/// most one player can have a winning pattern, so this changes
/// nothing; on malformed logs naming two winners it makes the outcome
/// deterministic: the owner of the last matching pattern takes the
/// round.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn evaluate(moves: &[Move]) -> Verdict {
    let claimed = |player: Player| -> Vec<Cell> {
        moves
            .iter()
            .filter(|mv| mv.player == player)
            .map(|mv| mv.cell)
            .collect()
    };
    let first = claimed(Player::One);
    let second = claimed(Player::Two);

    let mut winner = None;
    for pattern in &WIN_PATTERNS {
        if pattern.iter().all(|cell| first.contains(cell)) {
            winner = Some(Player::One);
        }
        if pattern.iter().all(|cell| second.contains(cell)) {
            winner = Some(Player::Two);
        }
    }

    match winner {
        Some(player) => Verdict::Won(player),
        None if moves.len() == 9 => Verdict::Tie,
        None => Verdict::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(cells: &[(u8, Player)]) -> Vec<Move> {
        cells
            .iter()
            .map(|&(digit, player)| {
                Move::new(Cell::from_digit(digit).expect("test digit"), player)
            })
            .collect()
    }

    #[test]
    fn empty_log_is_in_progress() {
        assert_eq!(evaluate(&[]), Verdict::InProgress);
    }

    #[test]
    fn partial_round_is_in_progress() {
        let opening = moves(&[(5, Player::One)]);
        assert_eq!(evaluate(&opening), Verdict::InProgress);
        assert_eq!(evaluate(&opening).winner(), None);

        let log = moves(&[(1, Player::One), (5, Player::Two), (9, Player::One)]);
        assert_eq!(evaluate(&log), Verdict::InProgress);
    }

    #[test]
    fn top_row_wins() {
        let log = moves(&[
            (1, Player::One),
            (4, Player::Two),
            (2, Player::One),
            (5, Player::Two),
            (3, Player::One),
        ]);
        assert_eq!(evaluate(&log), Verdict::Won(Player::One));
    }

    #[test]
    fn anti_diagonal_wins_for_second_player() {
        let log = moves(&[
            (1, Player::One),
            (3, Player::Two),
            (2, Player::One),
            (5, Player::Two),
            (4, Player::One),
            (7, Player::Two),
        ]);
        assert_eq!(evaluate(&log), Verdict::Won(Player::Two));
    }

    #[test]
    fn win_is_detected_regardless_of_claim_order() {
        // Column 2-5-8 claimed out of pattern order.
        let log = moves(&[
            (8, Player::One),
            (1, Player::Two),
            (2, Player::One),
            (9, Player::Two),
            (5, Player::One),
        ]);
        assert_eq!(evaluate(&log), Verdict::Won(Player::One));
    }

    #[test]
    fn full_board_without_pattern_is_tie() {
        // X O X / X O X / O X O
        let log = moves(&[
            (1, Player::One),
            (2, Player::Two),
            (3, Player::One),
            (5, Player::Two),
            (4, Player::One),
            (7, Player::Two),
            (6, Player::One),
            (9, Player::Two),
            (8, Player::One),
        ]);
        assert_eq!(evaluate(&log), Verdict::Tie);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let log = moves(&[
            (5, Player::One),
            (1, Player::Two),
            (9, Player::One),
            (3, Player::Two),
        ]);
        assert_eq!(evaluate(&log), evaluate(&log));
        assert_eq!(evaluate(&log), Verdict::InProgress);
    }

    #[test]
    fn last_matching_pattern_decides_malformed_logs() {
        // Not reachable through play: both players hold a full
        // pattern. The scan keeps going, so the later pattern in
        // WIN_PATTERNS order decides.
        let both = moves(&[
            (1, Player::One),
            (7, Player::Two),
            (2, Player::One),
            (8, Player::Two),
            (3, Player::One),
            (9, Player::Two),
        ]);
        // Player 2's bottom row comes after Player 1's top row.
        assert_eq!(evaluate(&both), Verdict::Won(Player::Two));

        let flipped = moves(&[
            (7, Player::One),
            (1, Player::Two),
            (8, Player::One),
            (2, Player::Two),
            (9, Player::One),
            (3, Player::Two),
        ]);
        assert_eq!(evaluate(&flipped), Verdict::Won(Player::One));
    }

    #[test]
    fn patterns_cover_rows_columns_and_diagonals() {
        let digits: Vec<[u8; 3]> = WIN_PATTERNS
            .iter()
            .map(|pattern| [pattern[0].digit(), pattern[1].digit(), pattern[2].digit()])
            .collect();
        assert_eq!(
            digits,
            vec![
                [1, 2, 3],
                [4, 5, 6],
                [7, 8, 9],
                [1, 4, 7],
                [2, 5, 8],
                [3, 6, 9],
                [1, 5, 9],
                [3, 5, 7],
            ]
        );
    }
}
