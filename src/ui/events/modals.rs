//! Modal dialog handlers
//!
//! This module handles user input for the origin modal.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Open the origin modal prefilled with the current origin
pub fn handle_origin_dialog(state: &Arc<RwLock<AppState>>, origin: Option<&str>) {
    apply(
        state,
        AppAction::EnterOriginInput {
            origin: origin.map(str::to_string),
        },
    );
    tracing::debug!("entering origin input mode");
}

/// Handle a key in the origin modal. Returns the validated origin on Enter.
pub fn handle_origin_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> Result<Option<String>> {
    match key.code {
        KeyCode::Enter => {
            let input = state.read().unwrap().origin_input.clone();
            match config::validate_origin(&input) {
                Ok(origin) => {
                    apply(state, AppAction::ExitOriginInput);
                    tracing::info!(%origin, "origin submitted");
                    return Ok(Some(origin));
                }
                Err(e) => {
                    tracing::debug!("invalid origin {input:?}: {e}");
                    apply(state, AppAction::SetOriginError(e.to_string()));
                }
            }
        }

        KeyCode::Esc => {
            apply(state, AppAction::ExitOriginInput);
            tracing::debug!("origin input cancelled");
        }

        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceOriginInput);
        }

        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearOriginInput);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToOriginInput(c.to_string()));
        }

        _ => {}
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with_origin_input(input: &str) -> Arc<RwLock<AppState>> {
        let state = Arc::new(RwLock::new(AppState::default()));
        handle_origin_dialog(&state, Some(input));
        state
    }

    #[test]
    fn test_enter_submits_valid_origin() {
        let state = state_with_origin_input("http://localhost:5000/index.html");

        let submitted = handle_origin_input(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(submitted.as_deref(), Some("http://localhost:5000"));
        let s = state.read().unwrap();
        assert_eq!(s.input_mode, InputMode::Normal);
        assert!(s.origin_input.is_empty());
    }

    #[test]
    fn test_enter_keeps_modal_open_on_invalid_origin() {
        let state = state_with_origin_input("localhost:5000");

        let submitted = handle_origin_input(key(KeyCode::Enter), &state).unwrap();

        assert!(submitted.is_none());
        let s = state.read().unwrap();
        assert_eq!(s.input_mode, InputMode::EnteringOrigin);
        assert_eq!(
            s.origin_error.as_deref(),
            Some("URL must start with http:// or https://")
        );
    }

    #[test]
    fn test_escape_cancels() {
        let state = state_with_origin_input("http://localhost:5000");

        let submitted = handle_origin_input(key(KeyCode::Esc), &state).unwrap();

        assert!(submitted.is_none());
        assert_eq!(state.read().unwrap().input_mode, InputMode::Normal);
    }

    #[test]
    fn test_ctrl_l_and_backspace() {
        let state = state_with_origin_input("http://a");

        handle_origin_input(key(KeyCode::Backspace), &state).unwrap();
        assert_eq!(state.read().unwrap().origin_input, "http://");

        handle_origin_input(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            &state,
        )
        .unwrap();
        assert!(state.read().unwrap().origin_input.is_empty());
    }
}
