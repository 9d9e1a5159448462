//! Terminal UI for rematch.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::games::tictactoe::Cell;
use app::App;

/// Runs the interactive match until the player quits.
pub fn run(config: MatchConfig) -> Result<()> {
    info!("Starting rematch TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_match(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Draw-and-input loop. Redraws on a short poll timeout so resizes
/// stay responsive even when no keys arrive.
fn run_match<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // The overlay captures input until the round is acknowledged.
        if app.overlay().is_some() {
            match key.code {
                KeyCode::Char('q') => {
                    info!("Player quit");
                    return Ok(());
                }
                KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('r') => app.new_round(),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') => {
                info!("Player quit");
                return Ok(());
            }
            KeyCode::Char('n') | KeyCode::Char('r') => app.new_round(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(cell) = c.to_digit(10).and_then(|digit| Cell::from_digit(digit as u8)) {
                    app.select(cell);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.place_at_cursor(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                app.move_cursor(key.code)
            }
            _ => {
                debug!(?key, "Unbound key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal
            .draw(|frame| ui::draw(frame, app))
            .expect("draw frame");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn match_screen_renders_on_an_in_memory_backend() {
        let app = App::new(MatchConfig::default());
        let rendered = render(&app);

        assert!(rendered.contains("Rematch - Tic Tac Toe"));
        assert!(rendered.contains("Player 1, you are up!"));
        assert!(rendered.contains("Ties: 0"));
    }

    #[test]
    fn completed_round_renders_the_overlay() {
        let mut app = App::new(MatchConfig::default());
        for digit in [1, 4, 2, 5, 3] {
            app.select(Cell::from_digit(digit).expect("digit"));
        }

        let rendered = render(&app);
        assert!(rendered.contains("Round over"));
        assert!(rendered.contains("Player 1 wins!"));
        assert!(rendered.contains("Press Enter to start a new round"));
    }
}
