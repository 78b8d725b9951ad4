//! Application state and core logic

use crate::api::{PortalApi, PortalClient};
use crate::config::PortalConfig;
use crate::state::{AppState, ProgressTask, View};
use crate::submit::{SubmissionController, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Message shown when the initial page-data fetch fails
pub const LOAD_FAILURE_MSG: &str = "Failed to load data.";

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,
    /// Portal API client
    api: PortalClient,
    /// Contact form submission controller
    controller: SubmissionController,
    /// Status message shown in the status bar (one surface, last writer wins)
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = PortalConfig::load().unwrap_or_default();
        let api = PortalClient::new(config.api_base_url)?;

        Ok(Self {
            state: AppState::default(),
            api,
            controller: SubmissionController::new(),
            status_message: None,
            quit: false,
        })
    }

    /// Fetch the account page data; called once at startup
    pub async fn load_page_data(&mut self) {
        match self.api.fetch_page_data().await {
            Ok(data) => {
                self.state.page_data = Some(data);
                self.status_message = Some("Data loaded successfully.".to_string());
            }
            Err(err) => {
                tracing::error!("error loading data: {err:#}");
                self.push_error(LOAD_FAILURE_MSG);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Advance the progress task, if one is running. Called every loop pass.
    pub fn tick(&mut self) {
        if let Some(task) = self.state.progress.as_mut() {
            if task.update() {
                self.state.progress = None;
                tracing::info!("task completed");
                self.status_message = Some("Task completed.".to_string());
            }
        }
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Overview => self.handle_overview_key(key),
            View::Contact => self.handle_contact_key(key).await,
        }
        Ok(())
    }

    /// Handle keys in the Overview view
    fn handle_overview_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('c') => self.state.current_view = View::Contact,
            KeyCode::Char('r') => self.start_progress_task(),
            _ => {}
        }
    }

    fn start_progress_task(&mut self) {
        if self.state.progress.is_some() {
            tracing::info!("the task is already running");
            self.status_message = Some("Task already running.".to_string());
        } else {
            self.state.progress = Some(ProgressTask::new());
            self.status_message = Some("Task started.".to_string());
        }
    }

    /// Handle keys in the Contact view
    async fn handle_contact_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Esc => {
                self.state.form.blur_active();
                self.state.current_view = View::Overview;
            }
            KeyCode::Enter if self.state.form.is_buttons_row_active() => {
                self.submit_contact().await;
            }
            // Submit shortcut from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact().await;
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Run one submission attempt and surface its message, if any
    async fn submit_contact(&mut self) {
        match self
            .controller
            .submit(&mut self.state.form, &mut self.api)
            .await
        {
            SubmitOutcome::Settled(result) => {
                self.status_message = Some(result.message().to_string());
            }
            // Skipped silently: the per-field markers are the only feedback.
            SubmitOutcome::Rejected => {}
            SubmitOutcome::InFlight => {}
        }
    }
}
