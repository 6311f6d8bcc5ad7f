//! Copy handlers
//!
//! This module copies the rendered response to the system clipboard.

use super::helpers::show_toast;
use crate::clipboard::{copy_with_fallback, ClipboardSink, NativeClipboard, Osc52Clipboard};
use crate::state::AppState;
use crate::toast::ToastLevel;
use std::sync::{Arc, RwLock};

/// Copy the current response using the native clipboard, then OSC 52
pub fn handle_copy_response(state: &Arc<RwLock<AppState>>) {
    copy_response(state, &mut NativeClipboard, &mut Osc52Clipboard::stdout());
}

/// Copy the rendered response text. Returns true if the text reached a clipboard.
pub fn copy_response(
    state: &Arc<RwLock<AppState>>,
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
) -> bool {
    let text = {
        let s = state.read().unwrap();
        s.output.copyable_text().map(str::to_string)
    };

    let Some(text) = text else {
        show_toast(state, "No response to copy", ToastLevel::Warning);
        return false;
    };

    match copy_with_fallback(&text, primary, fallback) {
        Ok(sink) => {
            tracing::info!(sink, bytes = text.len(), "response copied");
            show_toast(state, "Response copied to clipboard!", ToastLevel::Success);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "could not copy response");
            show_toast(state, format!("Copy failed: {e}"), ToastLevel::Danger);
            false
        }
    }
}
