//! Application state and logic.

use crate::config::MatchConfig;
use crate::games::tictactoe::{Cell, Verdict};
use crate::session::MatchSession;
use crossterm::event::KeyCode;
use tracing::debug;

use super::input;

/// Main application state: the match session plus view-only concerns
/// like the cursor and the result overlay.
pub struct App {
    session: MatchSession,
    config: MatchConfig,
    cursor: Cell,
    /// Set while the round-complete overlay is showing.
    overlay: Option<Verdict>,
}

impl App {
    /// Creates a new application with the cursor on the center cell.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            session: MatchSession::new(),
            config,
            cursor: Cell::Center,
            overlay: None,
        }
    }

    /// The running match.
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Player display names.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// The verdict being shown in the overlay, if any.
    pub fn overlay(&self) -> Option<Verdict> {
        self.overlay
    }

    /// Claims `cell` for the player to move and raises the overlay if
    /// that move ends the round. The cursor follows digit input so
    /// keyboard navigation picks up where direct selection left off.
    pub fn select(&mut self, cell: Cell) {
        self.cursor = cell;
        let verdict = self.session.play(cell);
        if verdict.is_over() {
            debug!(%verdict, "raising round-complete overlay");
            self.overlay = Some(verdict);
        }
    }

    /// Claims the cell under the cursor.
    pub fn place_at_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Moves the cursor in response to an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Clears the board for a new round and drops the overlay. The
    /// session tally carries over.
    pub fn new_round(&mut self) {
        debug!("starting new round");
        self.session.new_round();
        self.overlay = None;
    }
}
