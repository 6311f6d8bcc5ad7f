//! Main panel rendering
//!
//! This module contains rendering functions for the two main panels:
//! - Presets panel (left side)
//! - Response panel (right side)

use super::styling;
use super::wrap::hard_wrap;
use crate::state::AppState;
use crate::types::{InputMode, ProbeOutput, LOADING_TEXT};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the list of preset endpoints
pub fn render_presets_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    list_state: &mut ListState,
) {
    let border_color = if state.input_mode == InputMode::Normal {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title(format!("[1] Presets ({})", state.presets.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if state.presets.is_empty() {
        let empty = Paragraph::new("No presets configured\n\nPress [e] to type an endpoint")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .presets
        .iter()
        .map(|preset| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    preset.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("  {}", preset.path),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the response panel, colored by outcome
pub fn render_response_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, style, border_color) = match &state.output {
        ProbeOutput::Empty => (
            "Press [Enter] on a preset or [e] to type an endpoint",
            Style::default().fg(Color::DarkGray),
            styling::unfocused_border(),
        ),
        ProbeOutput::Loading => (
            LOADING_TEXT,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            Color::Gray,
        ),
        ProbeOutput::Rendered { text, outcome } => {
            let color = styling::outcome_color(*outcome);
            (text.as_str(), Style::default().fg(color), color)
        }
    };

    let block = response_block().border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let lines: Vec<Line> = hard_wrap(text, inner.width)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect();

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((state.response_scroll, 0));

    frame.render_widget(content, area);
}

/// Furthest the response can scroll in `area` before its last row leaves the bottom
pub fn response_scroll_limit(area: Rect, output: &ProbeOutput) -> u16 {
    let ProbeOutput::Rendered { text, .. } = output else {
        return 0;
    };

    let inner = response_block().inner(area);
    let rows = hard_wrap(text, inner.width).len();
    let hidden = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn response_block() -> Block<'static> {
    Block::default().title("[2] Response").borders(Borders::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn rendered(text: String) -> ProbeOutput {
        ProbeOutput::Rendered {
            text,
            outcome: Outcome::Success,
        }
    }

    #[test]
    fn test_scroll_limit_counts_wrapped_rows() {
        // 40x10 panel leaves 38x8 for text
        let area = Rect::new(0, 0, 40, 10);
        let text = format!("{{\n  \"quote\": \"{}\"\n}}", "x".repeat(200));

        // 1 + ceil(213 / 38) + 1 = 8 rows fit exactly
        assert_eq!(response_scroll_limit(area, &rendered(text.clone())), 0);

        let longer = format!("{text}\n{text}");
        assert_eq!(response_scroll_limit(area, &rendered(longer)), 8);
    }

    #[test]
    fn test_scroll_limit_without_rendered_output() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(response_scroll_limit(area, &ProbeOutput::Loading), 0);
        assert_eq!(response_scroll_limit(area, &ProbeOutput::Empty), 0);
    }
}
