//! Match session: one owner for the round log and the running score.

use crate::games::tictactoe::{evaluate, Cell, MoveLog, Player, SessionTally, Verdict};
use tracing::{debug, info, instrument};

/// A running match: the current round's move log plus the session
/// tally.
///
/// Input handlers borrow the session instead of reaching into shared
/// state, and the session is the only place that reports finished
/// rounds to the tally, so each round is recorded exactly once no
/// matter how much input arrives after it ends.
#[derive(Debug, Clone, Default)]
pub struct MatchSession {
    log: MoveLog,
    tally: SessionTally,
}

impl MatchSession {
    /// Creates a fresh session: empty board, zeroed tally.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new match session");
        Self {
            log: MoveLog::new(),
            tally: SessionTally::new(),
        }
    }

    /// Handles one cell selection.
    ///
    /// Input after the round has completed is ignored, as are claims
    /// on occupied cells. When a move finishes the round, the outcome
    /// lands in the tally before this returns; only the completing
    /// move can reach that branch, so the tally moves by exactly one
    /// per round.
    #[instrument(skip(self), fields(cell = cell.digit()))]
    pub fn play(&mut self, cell: Cell) -> Verdict {
        let verdict = self.verdict();
        if verdict.is_over() {
            debug!("round already over, ignoring input");
            return verdict;
        }

        let Some(mv) = self.log.append(cell) else {
            return verdict;
        };

        let verdict = self.verdict();
        if verdict.is_over() {
            self.tally.record(verdict.winner());
            info!(%verdict, rounds = self.tally.rounds(), "round complete");
        } else {
            debug!(%mv, next = %self.next_player(), "move applied");
        }
        verdict
    }

    /// Starts a new round by clearing the board. The tally is
    /// untouched.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        info!(moves = self.log.len(), "clearing board for a new round");
        self.log.reset();
    }

    /// Evaluates the current round from the log. Recomputed on every
    /// call; nothing is cached between moves.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.log.moves())
    }

    /// The player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.log.next_player()
    }

    /// The current round's move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// The session score.
    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(session: &mut MatchSession, digits: &[u8]) -> Verdict {
        let mut verdict = session.verdict();
        for &digit in digits {
            verdict = session.play(Cell::from_digit(digit).expect("test digit"));
        }
        verdict
    }

    #[test]
    fn winning_round_is_tallied_once() {
        let mut session = MatchSession::new();
        // Player 1 takes the top row.
        let verdict = play_all(&mut session, &[1, 4, 2, 5, 3]);

        assert_eq!(verdict, Verdict::Won(Player::One));
        assert_eq!(session.tally().wins(Player::One), 1);
        assert_eq!(session.tally().rounds(), 1);
    }

    #[test]
    fn input_after_completion_is_ignored() {
        let mut session = MatchSession::new();
        play_all(&mut session, &[1, 4, 2, 5, 3]);

        let verdict = play_all(&mut session, &[6, 7, 8, 9]);

        assert_eq!(verdict, Verdict::Won(Player::One));
        assert_eq!(session.log().len(), 5);
        // Still exactly one recorded round.
        assert_eq!(session.tally().wins(Player::One), 1);
        assert_eq!(session.tally().rounds(), 1);
    }

    #[test]
    fn new_round_clears_board_but_keeps_score() {
        let mut session = MatchSession::new();
        play_all(&mut session, &[1, 4, 2, 5, 3]);

        session.new_round();

        assert!(session.log().is_empty());
        assert_eq!(session.verdict(), Verdict::InProgress);
        assert_eq!(session.next_player(), Player::One);
        assert_eq!(session.tally().wins(Player::One), 1);
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let mut session = MatchSession::new();

        // Round 1: Player 1 wins the top row.
        play_all(&mut session, &[1, 4, 2, 5, 3]);
        session.new_round();

        // Round 2: Player 2 wins the left column.
        play_all(&mut session, &[2, 1, 3, 4, 5, 7]);
        session.new_round();

        // Round 3: tie.
        let verdict = play_all(&mut session, &[1, 2, 3, 5, 4, 7, 6, 9, 8]);

        assert_eq!(verdict, Verdict::Tie);
        assert_eq!(session.tally().wins(Player::One), 1);
        assert_eq!(session.tally().wins(Player::Two), 1);
        assert_eq!(*session.tally().ties(), 1);
        assert_eq!(session.tally().rounds(), 3);
    }

    #[test]
    fn occupied_cell_does_not_advance_the_turn() {
        let mut session = MatchSession::new();
        session.play(Cell::Center);
        let verdict = session.play(Cell::Center);

        assert_eq!(verdict, Verdict::InProgress);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.next_player(), Player::Two);
    }
}
