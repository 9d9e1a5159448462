//! Headless round replay from scripted cell lists.

use crate::games::tictactoe::{Cell, Move, Player};
use crate::session::MatchSession;
use anyhow::Context;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{instrument, warn};

/// A scripted round: cell digits in play order.
///
/// Players are not part of the script. They are derived by
/// alternation, Player 1 first, exactly as in interactive play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveScript {
    cells: Vec<Cell>,
}

impl MoveScript {
    /// Parses a JSON array of cell digits, e.g. `[1, 5, 9, 2, 3]`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let digits: Vec<u8> =
            serde_json::from_str(json).context("script must be a JSON array of cell digits")?;
        Self::from_digits(&digits)
    }

    /// Reads a JSON script file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read script {}", path.as_ref().display()))?;
        Self::from_json(&content)
    }

    /// Parses a comma-separated digit list, e.g. `1,5,9,2,3`.
    pub fn from_csv(csv: &str) -> anyhow::Result<Self> {
        let digits = csv
            .split(',')
            .map(|token| token.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .context("moves must be cell digits separated by commas")?;
        Self::from_digits(&digits)
    }

    fn from_digits(digits: &[u8]) -> anyhow::Result<Self> {
        let cells = digits
            .iter()
            .map(|&digit| Cell::try_from(digit))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// The scripted cells in play order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Result of replaying a script.
///
/// Serializes to the wire shape `{"status", "winner", "moves", "log"}`
/// with `status` either `"in-progress"` or `"complete"` and `winner`
/// the winning player number or `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// `"in-progress"` or `"complete"`.
    pub status: &'static str,
    /// Winning player number, if the round was won.
    pub winner: Option<u8>,
    /// Number of script entries actually applied.
    pub moves: usize,
    /// The applied moves in play order.
    pub log: Vec<Move>,
}

impl ReplayReport {
    fn from_session(session: &MatchSession) -> Self {
        let verdict = session.verdict();
        Self {
            status: if verdict.is_over() {
                "complete"
            } else {
                "in-progress"
            },
            winner: verdict.winner().map(Player::number),
            moves: session.log().len(),
            log: session.log().moves().to_vec(),
        }
    }

    /// The board after the script, one character per cell: the
    /// player's mark where claimed, the cell digit where empty.
    pub fn board_text(&self) -> String {
        let occupant = |cell: Cell| {
            self.log
                .iter()
                .find(|mv| mv.cell == cell)
                .map(|mv| mv.player)
        };

        let mut out = String::new();
        for (row_index, row) in Cell::ROWS.iter().enumerate() {
            for (col_index, &cell) in row.iter().enumerate() {
                match occupant(cell) {
                    Some(player) => out.push(player.mark()),
                    None => out.push(char::from(b'0' + cell.digit())),
                }
                if col_index < 2 {
                    out.push('|');
                }
            }
            if row_index < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }

    /// One-line summary of the outcome.
    pub fn headline(&self) -> String {
        let mut line = String::new();
        match self.winner.and_then(|number| Player::try_from(number).ok()) {
            Some(player) => {
                let _ = write!(line, "{player} wins! ({} moves)", self.moves);
            }
            None if self.status == "complete" => {
                let _ = write!(line, "Tie! ({} moves)", self.moves);
            }
            None => {
                let next = match self.log.last() {
                    Some(last) => last.player.opponent(),
                    None => Player::One,
                };
                let _ = write!(
                    line,
                    "Round in progress after {} moves, {next} is up",
                    self.moves
                );
            }
        }
        line
    }
}

/// Replays `script` through a fresh session and reports the outcome.
///
/// Entries naming occupied cells and entries arriving after the round
/// completes are ignored with a warning, matching the interactive
/// shell's handling of the same input.
#[instrument(skip(script), fields(entries = script.cells().len()))]
pub fn run(script: &MoveScript) -> ReplayReport {
    let mut session = MatchSession::new();

    for &cell in script.cells() {
        if session.verdict().is_over() {
            warn!(cell = cell.digit(), "round already complete, entry ignored");
            continue;
        }
        let before = session.log().len();
        session.play(cell);
        if session.log().len() == before {
            warn!(cell = cell.digit(), "cell already taken, entry ignored");
        }
    }

    ReplayReport::from_session(&session)
}
