//! Endpoint field handlers
//!
//! Keys typed while the endpoint field has focus. Enter sends the request and
//! keeps focus so the endpoint can be tweaked and re-sent.

use super::execution::handle_probe_custom;
use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use reqwest::Client;
use std::sync::{Arc, RwLock};

pub fn handle_endpoint_input(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    client: &Client,
    origin: Option<&str>,
) {
    match key.code {
        KeyCode::Enter => {
            handle_probe_custom(Arc::clone(state), client, origin);
        }
        KeyCode::Esc => apply(state, AppAction::ExitEndpointInput),
        KeyCode::Backspace => apply(state, AppAction::BackspaceEndpointInput),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordEndpointInput);
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearEndpointInput);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::AppendToEndpointInput(c.to_string()));
        }
        _ => {}
    }
}
