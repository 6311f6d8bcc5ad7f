//! Helper functions for event handling
//!
//! This module contains utility functions used across event handlers:
//! - State locking helpers (apply actions)
//! - Toast shortcuts
//! - Paste cleanup

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::toast::ToastLevel;
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = state.write().unwrap();
    apply_action(action, &mut s);
}

pub fn show_toast(state: &Arc<RwLock<AppState>>, message: impl Into<String>, level: ToastLevel) {
    apply(
        state,
        AppAction::ShowToast {
            message: message.into(),
            level,
        },
    );
}

/// Pasted text as it should land in a single-line field
pub fn single_line(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_drops_line_breaks_and_tabs() {
        assert_eq!(single_line("/api/quotes\r\n"), "/api/quotes");
        assert_eq!(single_line("a\tb\nc"), "abc");
        assert_eq!(single_line("\n"), "");
    }
}
