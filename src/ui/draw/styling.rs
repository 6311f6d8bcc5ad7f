//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use crate::toast::ToastLevel;
use crate::types::Outcome;
use ratatui::style::Color;

/// Color for a rendered response, by outcome
pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Success => Color::Green,
        Outcome::Warning => Color::Yellow,
        Outcome::Danger => Color::Red,
    }
}

pub fn toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Info => Color::Cyan,
        ToastLevel::Success => Color::Green,
        ToastLevel::Warning => Color::Yellow,
        ToastLevel::Danger => Color::Red,
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Scroll lines per action (Ctrl+U / Ctrl+D)
pub const SCROLL_LINES_PER_ACTION: u16 = 5;

pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
