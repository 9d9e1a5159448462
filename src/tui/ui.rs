//! Stateless UI rendering for the match screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use crate::games::tictactoe::{Cell, Player, Verdict};

/// Renders the whole match screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Turn banner
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Scoreboard
            Constraint::Length(1),  // Key help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_banner(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);
    draw_scoreboard(frame, chunks[3], app);
    draw_help(frame, chunks[4]);

    if let Some(verdict) = app.overlay() {
        draw_overlay(frame, verdict, app);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Yellow,
        Player::Two => Color::Cyan,
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Rematch - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.session().verdict() {
        Verdict::InProgress => {
            let player = app.session().next_player();
            Line::from(Span::styled(
                format!("{}, you are up!", app.config().name_of(player)),
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            ))
        }
        Verdict::Won(player) => Line::from(Span::styled(
            format!("{} wins!", app.config().name_of(player)),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )),
        Verdict::Tie => Line::from(Span::styled(
            "Tie!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, Cell::ROWS[0]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, Cell::ROWS[1]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, Cell::ROWS[2]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: [Cell; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, cells[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, cells[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, cells[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let (symbol, base_style) = match app.session().log().occupant(cell) {
        Some(player) => (
            format!(" {} ", player.mark()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        None => (
            format!(" {} ", cell.digit()),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let style = if cell == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let tally = app.session().tally();
    let config = app.config();
    // While the finished board is still up, show the round that just
    // ended rather than the next one.
    let round = if app.session().verdict().is_over() {
        tally.rounds()
    } else {
        tally.rounds() + 1
    };
    let text = format!(
        "Round {}   {} (X): {}   {} (O): {}   Ties: {}",
        round,
        config.name_of(Player::One),
        tally.wins(Player::One),
        config.name_of(Player::Two),
        tally.wins(Player::Two),
        tally.ties(),
    );
    let scoreboard = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title("Score").borders(Borders::ALL));
    frame.render_widget(scoreboard, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("1-9 place  arrows move  enter place  n new round  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_overlay(frame: &mut Frame, verdict: Verdict, app: &App) {
    let message = match verdict {
        Verdict::Won(player) => format!("{} wins!", app.config().name_of(player)),
        Verdict::Tie => "Tie!".to_string(),
        Verdict::InProgress => return,
    };

    let area = center_rect(frame.area(), 40, 7);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start a new round",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title("Round over").borders(Borders::ALL));
    frame.render_widget(overlay, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
