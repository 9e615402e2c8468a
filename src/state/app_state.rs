//! Application state definitions

use super::forms::RegistrationForm;
use super::toast::ToastQueue;
use std::time::{Duration, Instant};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// The registration form
    pub form: RegistrationForm,
    /// Notifications shown over the form
    pub toasts: ToastQueue,
    /// When the in-flight submission started
    pub submission_started: Option<Instant>,
    /// How long the simulated submission takes
    pub submit_delay: Duration,
}

impl AppState {
    pub fn new(submit_delay: Duration, toast_duration: Duration) -> Self {
        Self {
            form: RegistrationForm::new(),
            toasts: ToastQueue::new(toast_duration),
            submission_started: None,
            submit_delay,
        }
    }

    /// Fraction of the simulated delay that has elapsed, 0.0 to 1.0
    pub fn submission_progress(&self, now: Instant) -> f32 {
        let Some(started) = self.submission_started else {
            return 0.0;
        };
        if self.submit_delay.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.submit_delay.as_secs_f32()).clamp(0.0, 1.0)
    }
}
