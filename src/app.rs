//! Application state and core logic

use crate::backend::{RegistrationBackend, SimulatedBackend};
use crate::config::ClubConfig;
use crate::state::{AppState, FieldKind, Form, FormItem};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Events delivered to the UI loop from background tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The backend accepted the in-flight registration
    SubmissionFinished,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated registrations are sent
    backend: Arc<dyn RegistrationBackend>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the simulated endpoint
    pub fn new(config: &ClubConfig) -> Self {
        let backend = Arc::new(SimulatedBackend::new(config.submit_delay()));
        Self::with_backend(backend, config.submit_delay(), config.toast_duration())
    }

    pub fn with_backend(
        backend: Arc<dyn RegistrationBackend>,
        submit_delay: Duration,
        toast_duration: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(submit_delay, toast_duration),
            backend,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Housekeeping run once per loop iteration
    pub fn tick(&mut self, now: Instant) {
        self.state.toasts.prune_expired(now);
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply an event posted by a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished => {
                self.state.form.complete_submit(&mut self.state.toasts);
                self.state.submission_started = None;
                self.state.form.set_active_field(0);
            }
        }
    }

    /// Validate and, when valid, hand the registration to the backend.
    ///
    /// Ignored while a submission is in flight (the submit button is disabled).
    pub fn submit(&mut self) {
        if self.state.form.is_submitting() {
            tracing::debug!("submit ignored: submission in progress");
            return;
        }
        let Some(registration) = self.state.form.begin_submit(&mut self.state.toasts) else {
            return;
        };

        self.state.submission_started = Some(Instant::now());
        let backend = Arc::clone(&self.backend);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            backend.register(&registration).await;
            if events_tx.send(AppEvent::SubmissionFinished).is_err() {
                tracing::warn!("UI loop gone before submission finished");
            }
        });
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Esc dismisses the toast on screen first
        if key.code == KeyCode::Esc {
            self.state.toasts.dismiss();
            return Ok(());
        }

        let is_submit_shortcut = key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER));
        if is_submit_shortcut {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            _ => match self.state.form.active_item() {
                FormItem::Field(field) if field.kind() == FieldKind::Select => {
                    self.handle_select_key(key)
                }
                FormItem::Field(field) => self.handle_input_key(key, field.kind()),
                FormItem::PreferredDays => self.handle_days_key(key),
                FormItem::Submit => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
            },
        }
        Ok(())
    }

    /// Keys for text, numeric and multi-line inputs
    fn handle_input_key(&mut self, key: KeyEvent, kind: FieldKind) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            // Enter in a multi-line field adds a newline, elsewhere it advances
            KeyCode::Enter if kind == FieldKind::Multiline => form.input_newline(),
            KeyCode::Enter => form.next_field(),
            _ => {}
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.cycle_selection(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                form.cycle_selection(true)
            }
            _ => {}
        }
    }

    fn handle_days_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.move_day_cursor(false),
            KeyCode::Right | KeyCode::Char('l') => form.move_day_cursor(true),
            KeyCode::Char(' ') | KeyCode::Enter => form.toggle_day_at_cursor(),
            _ => {}
        }
    }
}
