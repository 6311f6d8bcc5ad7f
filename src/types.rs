use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text shown in the results area while a probe is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Visual classification of a settled probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx response
    Success,
    /// Reachable, but the status was not 2xx
    Warning,
    /// Transport failure or unreadable body
    Danger,
}

impl Outcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Outcome::Success
        } else {
            Outcome::Warning
        }
    }
}

/// What the results area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutput {
    /// Nothing has been dispatched yet
    Empty,
    Loading,
    Rendered { text: String, outcome: Outcome },
}

impl ProbeOutput {
    /// Text that is safe to hand to the clipboard.
    ///
    /// Returns `None` while nothing is rendered or a request is still loading.
    pub fn copyable_text(&self) -> Option<&str> {
        match self {
            ProbeOutput::Rendered { text, .. } if !text.is_empty() && text != LOADING_TEXT => {
                Some(text.as_str())
            }
            _ => None,
        }
    }
}

/// The most recent settled probe, overwritten on every completion
#[derive(Debug, Clone, PartialEq)]
pub enum LastResponse {
    Completed {
        status: u16,
        status_text: String,
        data: Value,
    },
    Failed {
        error: String,
    },
}

/// A named endpoint offered as a one-key shortcut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub path: String,
}

impl Preset {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditingEndpoint,
    EnteringOrigin,
}
