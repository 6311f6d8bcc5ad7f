//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Header, endpoint input bar, footer
//! - `modals`: Origin configuration modal
//! - `panels`: Presets list and response panel
//! - `toasts`: Toast overlay
//! - `styling`: Color schemes and style constants
//! - `wrap`: Hard wrapping by display width

mod components;
mod modals;
mod panels;
pub mod styling;
mod toasts;
mod wrap;

pub use components::{render_endpoint_bar, render_footer, render_header};
pub use modals::render_origin_modal;
pub use panels::{render_presets_panel, render_response_panel};
pub use toasts::render_toasts;

use crate::state::AppState;
use crate::types::InputMode;
use crate::types::ProbeOutput;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListState,
    Frame,
};

/// Screen regions for one frame
struct Areas {
    header: Rect,
    endpoint: Rect,
    presets: Rect,
    response: Rect,
    footer: Rect,
}

fn split_areas(area: Rect) -> Areas {
    // Header, endpoint bar, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[2]);

    Areas {
        header: main_chunks[0],
        endpoint: main_chunks[1],
        presets: body_chunks[0],
        response: body_chunks[1],
        footer: main_chunks[3],
    }
}

/// How far the response panel can scroll on a screen of size `area`
pub fn response_scroll_limit(area: Rect, output: &ProbeOutput) -> u16 {
    panels::response_scroll_limit(split_areas(area).response, output)
}

/// Draw the whole screen for one frame
pub fn render_app(
    frame: &mut Frame,
    state: &AppState,
    list_state: &mut ListState,
    origin: Option<&str>,
    spinner_index: usize,
) {
    let areas = split_areas(frame.area());

    let display_origin = origin.unwrap_or("No origin configured");

    render_header(frame, areas.header, display_origin, state, spinner_index);
    render_endpoint_bar(frame, areas.endpoint, origin.unwrap_or(""), state);

    list_state.select(if state.presets.is_empty() {
        None
    } else {
        Some(state.selected_preset)
    });
    render_presets_panel(frame, areas.presets, state, list_state);
    render_response_panel(frame, areas.response, state);

    render_footer(frame, areas.footer, &state.input_mode);

    // Overlays last
    if state.input_mode == InputMode::EnteringOrigin {
        render_origin_modal(frame, state);
    }
    render_toasts(frame, &state.toasts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastLevel;
    use crate::types::{Outcome, Preset, ProbeOutput};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(state: &AppState, origin: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let mut list_state = ListState::default();
        terminal
            .draw(|frame| render_app(frame, state, &mut list_state, origin, 0))
            .unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_renders_presets_and_placeholder() {
        let state = AppState {
            presets: vec![Preset::new("Random quote", "/api/quotes/random")],
            ..Default::default()
        };

        let screen = draw(&state, Some("http://localhost:5000"));

        assert!(screen.contains("api probe - http://localhost:5000 [Idle]"));
        assert!(screen.contains("Random quote"));
        assert!(screen.contains("/api/quotes/random"));
        assert!(screen.contains("Press [Enter] on a preset"));
    }

    #[test]
    fn test_renders_loading_placeholder() {
        let state = AppState {
            output: ProbeOutput::Loading,
            in_flight: 1,
            ..Default::default()
        };

        let screen = draw(&state, Some("http://localhost:5000"));
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Probing"));
    }

    #[test]
    fn test_renders_response_and_toast() {
        let mut state = AppState {
            output: ProbeOutput::Rendered {
                text: "{\n  \"status\": 404,\n  \"statusText\": \"Not Found\"\n}".to_string(),
                outcome: Outcome::Warning,
            },
            ..Default::default()
        };
        state.toasts.push("Response copied to clipboard!", ToastLevel::Success);

        let screen = draw(&state, Some("http://localhost:5000"));
        assert!(screen.contains("\"statusText\": \"Not Found\""));
        assert!(screen.contains("Response copied to clipboard!"));
        assert!(screen.contains(" success "));
    }

    #[test]
    fn test_toast_overflow_keeps_newest() {
        let mut state = AppState::default();
        for i in 0..12 {
            state.toasts.push(format!("toast number {i:02}"), ToastLevel::Info);
        }

        // 30 rows minus the top margin fit nine toasts
        let screen = draw(&state, Some("http://localhost:5000"));
        assert!(!screen.contains("toast number 02"));
        assert!(screen.contains("toast number 03"));
        assert!(screen.contains("toast number 11"));
    }

    #[test]
    fn test_wrapped_body_scrolls_to_last_line() {
        let text = format!(
            "{{\n  \"quote\": \"{}\",\n  \"author\": \"LAST_LINE_MARKER\"\n}}",
            "x".repeat(400)
        );
        let mut state = AppState {
            output: ProbeOutput::Rendered {
                text,
                outcome: Outcome::Success,
            },
            ..Default::default()
        };

        let (width, height) = (80, 14);
        let limit = response_scroll_limit(Rect::new(0, 0, width, height), &state.output);
        crate::actions::apply_action(
            crate::actions::AppAction::SetResponseScrollLimit(limit),
            &mut state,
        );
        crate::actions::apply_action(crate::actions::AppAction::ScrollDown(u16::MAX), &mut state);
        assert_eq!(state.response_scroll, limit);

        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut list_state = ListState::default();
        terminal
            .draw(|frame| render_app(frame, &state, &mut list_state, Some("http://h"), 0))
            .unwrap();
        let screen = screen_text(&terminal);
        assert!(screen.contains("LAST_LINE_MARKER"));
    }

    #[test]
    fn test_endpoint_bar_shows_resolved_path() {
        let mut state = AppState {
            input_mode: InputMode::EditingEndpoint,
            endpoint_input: "quotes/random".to_string(),
            ..Default::default()
        };
        let screen = draw(&state, Some("http://localhost:5000"));
        assert!(screen.contains("http://localhost:5000/quotes/random_"));

        state.endpoint_input = "/quotes/random".to_string();
        let screen = draw(&state, Some("http://localhost:5000/"));
        assert!(screen.contains("http://localhost:5000/quotes/random_"));
        assert!(!screen.contains("5000//"));
    }

    #[test]
    fn test_renders_origin_modal() {
        let state = AppState {
            input_mode: InputMode::EnteringOrigin,
            origin_input: "http://127.0.0.1:8000".to_string(),
            origin_error: Some("URL must start with http:// or https://".to_string()),
            ..Default::default()
        };

        let screen = draw(&state, None);
        assert!(screen.contains("No origin configured"));
        assert!(screen.contains("Configure Origin"));
        assert!(screen.contains("http://127.0.0.1:8000_"));
        assert!(screen.contains("URL must start with http:// or https://"));
    }
}
