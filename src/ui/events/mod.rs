//! Event handling system for api-probe
//!
//! This module processes user input and translates it into state-changing actions.
//! It handles three input modes:
//! - Normal: preset navigation, sending, copying, scrolling
//! - EditingEndpoint: typing a custom endpoint
//! - EnteringOrigin: modal for configuring the origin
//!
//! # Lock Management
//!
//! Handlers lock `Arc<RwLock<AppState>>` only long enough to read a value or
//! apply one action. No lock is held while a request is being sent.

mod copy;
mod execution;
mod helpers;
mod input;
mod modals;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::InputMode;
use crate::ui::draw::styling::SCROLL_LINES_PER_ACTION;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use helpers::apply;
use reqwest::Client;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll for one input event and dispatch it based on input mode.
    ///
    /// Returns the new origin when the origin modal was submitted.
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        client: &Client,
        origin: Option<&str>,
    ) -> Result<Option<String>> {
        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return self.handle_key(key, state, client, origin);
                }
                Event::Paste(text) => handle_paste(&text, state),
                _ => {}
            }
        }
        Ok(None)
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        client: &Client,
        origin: Option<&str>,
    ) -> Result<Option<String>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(None);
        }

        let input_mode = state.read().unwrap().input_mode.clone();

        match input_mode {
            InputMode::EnteringOrigin => return modals::handle_origin_input(key, state),
            InputMode::EditingEndpoint => {
                input::handle_endpoint_input(key, state, client, origin);
            }
            InputMode::Normal => self.handle_normal_key(key, state, client, origin),
        }

        Ok(None)
    }

    fn handle_normal_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        client: &Client,
        origin: Option<&str>,
    ) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::SelectPresetDown),
            KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::SelectPresetUp),

            KeyCode::Enter | KeyCode::Char(' ') => {
                execution::handle_probe_preset(Arc::clone(state), client, origin);
            }

            KeyCode::Char('e') | KeyCode::Char('i') | KeyCode::Char('/') => {
                apply(state, AppAction::EnterEndpointInput);
            }

            KeyCode::Char('y') => copy::handle_copy_response(state),
            KeyCode::Char('x') => apply(state, AppAction::DismissToast),

            KeyCode::Char('d') if ctrl => {
                apply(state, AppAction::ScrollDown(SCROLL_LINES_PER_ACTION));
            }
            KeyCode::Char('u') if ctrl => {
                apply(state, AppAction::ScrollUp(SCROLL_LINES_PER_ACTION));
            }
            KeyCode::PageDown => apply(state, AppAction::ScrollDown(SCROLL_LINES_PER_ACTION)),
            KeyCode::PageUp => apply(state, AppAction::ScrollUp(SCROLL_LINES_PER_ACTION)),
            KeyCode::Char('J') => apply(state, AppAction::ScrollDown(1)),
            KeyCode::Char('K') => apply(state, AppAction::ScrollUp(1)),

            KeyCode::Char(',') => modals::handle_origin_dialog(state, origin),

            _ => {}
        }
    }
}

/// Bracketed paste lands in whichever field has focus
fn handle_paste(text: &str, state: &Arc<RwLock<AppState>>) {
    let text = helpers::single_line(text);
    if text.is_empty() {
        return;
    }

    let input_mode = state.read().unwrap().input_mode.clone();
    match input_mode {
        InputMode::EditingEndpoint => apply(state, AppAction::AppendToEndpointInput(text)),
        InputMode::EnteringOrigin => apply(state, AppAction::AppendToOriginInput(text)),
        InputMode::Normal => tracing::debug!("paste ignored outside an input field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastLevel;
    use crate::types::Preset;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState {
            presets: vec![
                Preset::new("Random quote", "/api/quotes/random"),
                Preset::new("All quotes", "/api/quotes"),
            ],
            ..Default::default()
        }))
    }

    #[test]
    fn test_quit_keys() {
        let state = test_state();
        let client = Client::new();

        let mut handler = EventHandler::new();
        handler.handle_key(key(KeyCode::Char('q')), &state, &client, None).unwrap();
        assert!(handler.should_quit);

        let mut handler = EventHandler::new();
        handler
            .handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state,
                &client,
                None,
            )
            .unwrap();
        assert!(handler.should_quit);
    }

    #[test]
    fn test_endpoint_field_focus_and_escape() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler.handle_key(key(KeyCode::Char('e')), &state, &client, None).unwrap();
        assert_eq!(state.read().unwrap().input_mode, InputMode::EditingEndpoint);

        handler.handle_key(key(KeyCode::Esc), &state, &client, None).unwrap();
        assert_eq!(state.read().unwrap().input_mode, InputMode::Normal);
        assert!(!handler.should_quit);
    }

    #[test]
    fn test_enter_on_blank_endpoint_shows_validation_toast() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler.handle_key(key(KeyCode::Char('e')), &state, &client, None).unwrap();
        handler
            .handle_key(key(KeyCode::Enter), &state, &client, Some("http://localhost:5000"))
            .unwrap();

        let s = state.read().unwrap();
        assert_eq!(s.output, crate::types::ProbeOutput::Empty);
        assert_eq!(s.toasts.iter().last().unwrap().level, ToastLevel::Danger);
        assert_eq!(s.input_mode, InputMode::EditingEndpoint);
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handle_paste("quotes/random", &state);
        assert!(state.read().unwrap().endpoint_input.is_empty());

        handler.handle_key(key(KeyCode::Char('e')), &state, &client, None).unwrap();
        handle_paste("/api/quotes\n", &state);
        handle_paste("?page=2", &state);
        assert_eq!(state.read().unwrap().endpoint_input, "/api/quotes?page=2");

        handler.handle_key(key(KeyCode::Esc), &state, &client, None).unwrap();
        handler.handle_key(key(KeyCode::Char(',')), &state, &client, None).unwrap();
        handle_paste("http://localhost:5000", &state);
        assert_eq!(state.read().unwrap().origin_input, "http://localhost:5000");
    }

    #[test]
    fn test_enter_after_typing_is_dispatched() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler.handle_key(key(KeyCode::Char('e')), &state, &client, None).unwrap();
        for c in "quotes".chars() {
            handler.handle_key(key(KeyCode::Char(c)), &state, &client, None).unwrap();
        }
        handler.handle_key(key(KeyCode::Enter), &state, &client, None).unwrap();

        let s = state.read().unwrap();
        assert_eq!(s.endpoint_input, "quotes");
        // No origin yet, so Enter reaches the send path and is refused there
        let toast = s.toasts.iter().last().unwrap();
        assert_eq!(toast.message, "No origin configured. Press , to set one");
        assert_eq!(toast.level, ToastLevel::Danger);
    }

    #[test]
    fn test_preset_navigation() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler.handle_key(key(KeyCode::Char('j')), &state, &client, None).unwrap();
        assert_eq!(state.read().unwrap().selected_preset, 1);

        handler.handle_key(key(KeyCode::Up), &state, &client, None).unwrap();
        assert_eq!(state.read().unwrap().selected_preset, 0);
    }

    #[test]
    fn test_copy_without_response_warns() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler.handle_key(key(KeyCode::Char('y')), &state, &client, None).unwrap();

        let s = state.read().unwrap();
        let toast = s.toasts.iter().last().unwrap();
        assert_eq!(toast.message, "No response to copy");
        assert_eq!(toast.level, ToastLevel::Warning);
    }

    #[test]
    fn test_origin_modal_round_trip() {
        let state = test_state();
        let client = Client::new();
        let mut handler = EventHandler::new();

        handler
            .handle_key(key(KeyCode::Char(',')), &state, &client, Some("http://localhost:5000"))
            .unwrap();
        assert_eq!(state.read().unwrap().input_mode, InputMode::EnteringOrigin);

        let submitted = handler
            .handle_key(key(KeyCode::Enter), &state, &client, Some("http://localhost:5000"))
            .unwrap();
        assert_eq!(submitted.as_deref(), Some("http://localhost:5000"));
    }
}
