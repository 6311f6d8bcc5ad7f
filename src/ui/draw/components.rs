//! Reusable UI components
//!
//! This module contains shared UI components used throughout the application:
//! - Header (origin and probe status)
//! - Endpoint input bar
//! - Footer (command help)

use super::styling::{self, SPINNER_FRAMES};
use crate::state::AppState;
use crate::types::InputMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the application header with origin and probe status
pub fn render_header(frame: &mut Frame, area: Rect, origin: &str, state: &AppState, spinner_index: usize) {
    let status_text = if state.is_probing() {
        let spinner = SPINNER_FRAMES[spinner_index % SPINNER_FRAMES.len()];
        if state.in_flight > 1 {
            format!("{spinner} Probing ({})", state.in_flight)
        } else {
            format!("{spinner} Probing")
        }
    } else {
        "Idle".to_string()
    };

    let header_text = format!("api probe - {origin} [{status_text}]");

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the custom endpoint field
pub fn render_endpoint_bar(frame: &mut Frame, area: Rect, origin: &str, state: &AppState) {
    let is_active = state.input_mode == InputMode::EditingEndpoint;

    let border_style = if is_active {
        Style::default().fg(styling::focused_border())
    } else {
        Style::default().fg(styling::unfocused_border())
    };

    let title = if is_active {
        " Endpoint (Enter: send, Esc: done) "
    } else {
        " Endpoint (e) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let cursor = if is_active { "_" } else { "" };

    // The request always goes to a path with a leading slash, so show one
    let input = &state.endpoint_input;
    let implied_slash = if input.trim().is_empty() || input.trim_start().starts_with('/') {
        ""
    } else {
        "/"
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{}{implied_slash}", origin.trim_end_matches('/')),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("{input}{cursor}")),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, input_mode: &InputMode) {
    let footer_text = match input_mode {
        InputMode::EditingEndpoint => "Enter:Send  Ctrl+W:Delete word  Ctrl+L:Clear  Esc:Done",
        InputMode::EnteringOrigin => "Enter:Save origin  Ctrl+L:Clear  Esc:Cancel",
        InputMode::Normal => {
            "j/k:Preset Enter:Send e:Endpoint y:Copy x:Dismiss Ctrl+D/U:Scroll ,:Origin q:Quit"
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
