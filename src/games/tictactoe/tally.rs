//! Session-lifetime win and tie counters.

use derive_getters::Getters;
use super::types::Player;
use tracing::{info, instrument};

/// Win and tie counts accumulated across rounds.
///
/// Counters only ever increase. There is no reset: the tally lives
/// exactly as long as the session, and starting a new round never
/// touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionTally {
    /// Rounds won by Player 1.
    player_one_wins: u32,
    /// Rounds won by Player 2.
    player_two_wins: u32,
    /// Rounds that filled the board with no winner.
    ties: u32,
}

impl SessionTally {
    /// Creates a tally with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed round: a win for `Some(player)`, a tie
    /// for `None`.
    ///
    /// Callers report each round exactly once; the tally does not
    /// deduplicate repeated reports.
    #[instrument(skip(self))]
    pub fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::One) => self.player_one_wins += 1,
            Some(Player::Two) => self.player_two_wins += 1,
            None => self.ties += 1,
        }
        info!(
            player_one_wins = self.player_one_wins,
            player_two_wins = self.player_two_wins,
            ties = self.ties,
            "round recorded"
        );
    }

    /// Total completed rounds this session.
    pub fn rounds(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.ties
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }
}
