use crate::toast::Toasts;
use crate::types::{InputMode, LastResponse, Preset, ProbeOutput};

#[derive(Debug, Clone)]
pub struct AppState {
    pub input_mode: InputMode,
    /// Free-text endpoint typed by the user
    pub endpoint_input: String,
    /// Buffer for the origin modal
    pub origin_input: String,
    pub origin_error: Option<String>,

    pub presets: Vec<Preset>,
    pub selected_preset: usize,

    /// What the results panel shows
    pub output: ProbeOutput,
    /// Most recent settled probe, overwritten on every completion
    pub last_response: Option<LastResponse>,
    /// Probes dispatched but not yet settled
    pub in_flight: usize,

    /// Scroll offset for the results panel (lines)
    pub response_scroll: u16,
    /// Largest scroll offset that still shows the last row, set on each draw
    pub response_scroll_limit: u16,

    pub toasts: Toasts,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Normal,
            endpoint_input: String::new(),
            origin_input: String::new(),
            origin_error: None,
            presets: Vec::new(),
            selected_preset: 0,
            output: ProbeOutput::Empty,
            last_response: None,
            in_flight: 0,
            response_scroll: 0,
            response_scroll_limit: 0,
            toasts: Toasts::default(),
        }
    }
}

impl AppState {
    pub fn with_presets(presets: Vec<Preset>, toasts: Toasts) -> Self {
        Self {
            presets,
            toasts,
            ..Default::default()
        }
    }

    pub fn selected_preset(&self) -> Option<&Preset> {
        self.presets.get(self.selected_preset)
    }

    pub fn is_probing(&self) -> bool {
        self.in_flight > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.output, ProbeOutput::Empty);
        assert!(state.last_response.is_none());
        assert!(!state.is_probing());
        assert!(state.selected_preset().is_none());
    }

    #[test]
    fn test_selected_preset() {
        let state = AppState::with_presets(
            vec![
                Preset::new("Random quote", "/api/quotes/random"),
                Preset::new("Categories", "/api/quotes/categories"),
            ],
            Toasts::default(),
        );
        assert_eq!(state.selected_preset().unwrap().path, "/api/quotes/random");
    }
}
