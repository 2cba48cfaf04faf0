//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::screen::{EMPTY_CELL, ScreenState};

/// Draws the whole screen from `state`.
pub fn draw(frame: &mut Frame, state: &ScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Turn label
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], state);

    let turn = Paragraph::new(state.turn_label().as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Turn"));
    frame.render_widget(turn, chunks[2]);

    let help = Paragraph::new("1-9 or arrows + Enter: move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(message) = state.notice() {
        draw_notice(frame, message);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, state: &ScreenState) {
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

    draw_row(frame, rows[0], state, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], state, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], state, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, state: &ScreenState, start: usize) {
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

    draw_cell(frame, cols[0], state, start);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], state, start + 1);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], state, start + 2);
}

fn draw_cell(frame: &mut Frame, area: Rect, state: &ScreenState, pos: usize) {
    let text = &state.cells()[pos];

    let (symbol, base_style) = if text == EMPTY_CELL {
        (format!("{}", pos + 1), Style::default().fg(Color::DarkGray))
    } else {
        (
            text.clone(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    };

    let style = if state.highlight()[pos] {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == *state.cursor() && state.notice().is_none() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_notice(frame: &mut Frame, message: &str) {
    let area = center_rect(frame.area(), 44, 7);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: new game | Q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let notice = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Game over")
            .style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(notice, area);
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
