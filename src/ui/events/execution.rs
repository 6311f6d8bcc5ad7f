//! Probe dispatch handlers
//!
//! This module turns a preset or the typed endpoint into a request.
//! Blank input and a missing origin are reported with a toast and nothing
//! is sent.

use super::helpers::show_toast;
use crate::probe::{dispatch_probe, endpoint_url};
use crate::state::AppState;
use crate::toast::ToastLevel;
use reqwest::Client;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;

/// Handle Enter on the presets list
pub fn handle_probe_preset(
    state: Arc<RwLock<AppState>>,
    client: &Client,
    origin: Option<&str>,
) -> Option<JoinHandle<()>> {
    let path = {
        let s = state.read().unwrap();
        s.selected_preset().map(|preset| preset.path.clone())
    };

    match path {
        Some(path) => probe_endpoint(state, client, origin, &path),
        None => {
            tracing::debug!("no preset selected");
            None
        }
    }
}

/// Handle Enter in the endpoint field
pub fn handle_probe_custom(
    state: Arc<RwLock<AppState>>,
    client: &Client,
    origin: Option<&str>,
) -> Option<JoinHandle<()>> {
    let input = state.read().unwrap().endpoint_input.clone();
    probe_endpoint(state, client, origin, &input)
}

fn probe_endpoint(
    state: Arc<RwLock<AppState>>,
    client: &Client,
    origin: Option<&str>,
    input: &str,
) -> Option<JoinHandle<()>> {
    let Some(origin) = origin else {
        show_toast(
            &state,
            "No origin configured. Press , to set one",
            ToastLevel::Danger,
        );
        return None;
    };

    match endpoint_url(origin, input) {
        Ok(url) => Some(dispatch_probe(state, client.clone(), url)),
        Err(e) => {
            tracing::debug!(input, "rejected endpoint: {e}");
            show_toast(&state, e.to_string(), ToastLevel::Danger);
            None
        }
    }
}
