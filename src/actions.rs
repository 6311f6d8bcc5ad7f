use crate::state::AppState;
use crate::toast::ToastLevel;
use crate::types::{InputMode, LastResponse, ProbeOutput};

/// Represents all possible state-changing actions in the application
/// Input handlers and background tasks describe what happened with an action;
/// apply_action is the only place that mutates AppState
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Endpoint field
    EnterEndpointInput,
    ExitEndpointInput,
    AppendToEndpointInput(String),
    BackspaceEndpointInput,
    DeleteWordEndpointInput,
    ClearEndpointInput,

    // Origin modal
    EnterOriginInput { origin: Option<String> },
    ExitOriginInput,
    AppendToOriginInput(String),
    BackspaceOriginInput,
    ClearOriginInput,
    SetOriginError(String),

    // Presets
    SelectPresetUp,
    SelectPresetDown,

    // Probe lifecycle
    BeginProbe,
    CompleteProbe {
        output: ProbeOutput,
        last_response: LastResponse,
    },

    // Results scrolling
    ScrollUp(u16),
    ScrollDown(u16),
    SetResponseScrollLimit(u16),

    // Toasts
    ShowToast { message: String, level: ToastLevel },
    DismissToast,
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::EnterEndpointInput => {
            state.input_mode = InputMode::EditingEndpoint;
        }
        AppAction::ExitEndpointInput => {
            state.input_mode = InputMode::Normal;
        }
        AppAction::AppendToEndpointInput(text) => {
            state.endpoint_input.push_str(&text);
        }
        AppAction::BackspaceEndpointInput => {
            state.endpoint_input.pop();
        }
        AppAction::DeleteWordEndpointInput => {
            delete_word(&mut state.endpoint_input);
        }
        AppAction::ClearEndpointInput => {
            state.endpoint_input.clear();
        }

        AppAction::EnterOriginInput { origin } => {
            state.input_mode = InputMode::EnteringOrigin;
            state.origin_input = origin.unwrap_or_default();
            state.origin_error = None;
        }
        AppAction::ExitOriginInput => {
            state.input_mode = InputMode::Normal;
            state.origin_input.clear();
            state.origin_error = None;
        }
        AppAction::AppendToOriginInput(text) => {
            state.origin_input.push_str(&text);
            state.origin_error = None;
        }
        AppAction::BackspaceOriginInput => {
            state.origin_input.pop();
            state.origin_error = None;
        }
        AppAction::ClearOriginInput => {
            state.origin_input.clear();
            state.origin_error = None;
        }
        AppAction::SetOriginError(message) => {
            state.origin_error = Some(message);
        }

        AppAction::SelectPresetUp => {
            state.selected_preset = state.selected_preset.saturating_sub(1);
        }
        AppAction::SelectPresetDown => {
            if state.selected_preset + 1 < state.presets.len() {
                state.selected_preset += 1;
            }
        }

        AppAction::BeginProbe => {
            state.output = ProbeOutput::Loading;
            state.in_flight += 1;
            state.response_scroll = 0;
        }
        AppAction::CompleteProbe {
            output,
            last_response,
        } => {
            // Last completion wins, whatever order the requests were sent in
            state.output = output;
            state.last_response = Some(last_response);
            state.in_flight = state.in_flight.saturating_sub(1);
            state.response_scroll = 0;
        }

        AppAction::ScrollUp(lines) => {
            state.response_scroll = state.response_scroll.saturating_sub(lines);
        }
        AppAction::ScrollDown(lines) => {
            state.response_scroll = state
                .response_scroll
                .saturating_add(lines)
                .min(state.response_scroll_limit);
        }
        AppAction::SetResponseScrollLimit(limit) => {
            state.response_scroll_limit = limit;
            state.response_scroll = state.response_scroll.min(limit);
        }

        AppAction::ShowToast { message, level } => {
            state.toasts.push(message, level);
        }
        AppAction::DismissToast => {
            state.toasts.dismiss_latest();
        }
    }
}

/// Delete back to the previous word boundary (space, slash, question mark, ampersand)
fn delete_word(input: &mut String) {
    let trimmed_len = input.trim_end_matches(['/', ' ']).len();
    input.truncate(trimmed_len);

    match input.rfind([' ', '/', '?', '&']) {
        Some(pos) => input.truncate(pos + 1),
        None => input.clear(),
    }
}
