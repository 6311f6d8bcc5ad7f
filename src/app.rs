use crate::actions::{apply_action, AppAction};
use crate::config::Config;
use crate::probe::{build_client, endpoint_url};
use crate::startup;
use crate::state::AppState;
use crate::toast::{ToastLevel, Toasts};
use crate::types::InputMode;
use crate::ui::{self, draw};
use color_eyre::Result;
use ratatui::{widgets::ListState, DefaultTerminal, Frame};
use reqwest::Client;
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    client: Client,
    config: Config,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let toasts = Toasts::new(config.ui.toast_duration());
        let mut state = AppState::with_presets(config.presets.clone(), toasts);

        // Ask for an origin first if none is configured
        if config.server.origin.is_none() {
            state.input_mode = InputMode::EnteringOrigin;
        }

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            list_state: ListState::default(),
            client: build_client()?,
            config,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.probe_categories();

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % draw::styling::SPINNER_FRAMES.len();
                self.last_tick = Instant::now();
            }

            self.state.write().unwrap().toasts.prune(Instant::now());

            terminal.draw(|frame| self.draw(frame))?;

            let submitted = self.event_handler.handle_events(
                &self.state,
                &self.client,
                self.config.server.origin.as_deref(),
            )?;

            if let Some(origin) = submitted {
                self.update_origin(&origin);
            }
        }

        tracing::info!("api-probe exiting");
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let mut state = self.state.write().unwrap();
        let limit = draw::response_scroll_limit(frame.area(), &state.output);
        apply_action(AppAction::SetResponseScrollLimit(limit), &mut state);

        draw::render_app(
            frame,
            &state,
            &mut self.list_state,
            self.config.server.origin.as_deref(),
            self.spinner_index,
        );
    }

    fn update_origin(&mut self, origin: &str) {
        let (message, level) = match self.config.set_origin(origin) {
            Ok(origin) => (format!("Origin set to {origin}"), ToastLevel::Info),
            Err(e) => {
                tracing::error!("could not save origin: {e:#}");
                (format!("Could not save origin: {e}"), ToastLevel::Danger)
            }
        };
        let saved = level == ToastLevel::Info;
        self.state.write().unwrap().toasts.push(message, level);

        if saved {
            self.probe_categories();
        }
    }

    /// Log the categories the API offers; never shown in the UI
    fn probe_categories(&self) {
        let Some(origin) = self.config.server.origin.as_deref() else {
            return;
        };

        match endpoint_url(origin, &self.config.server.startup_probe) {
            Ok(url) => {
                startup::load_categories_background(self.client.clone(), url);
            }
            Err(e) => tracing::debug!("startup probe skipped: {e}"),
        }
    }
}
