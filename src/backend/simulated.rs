//! In-process stand-in for the club's registration endpoint

use super::traits::RegistrationBackend;
use crate::state::RegistrationData;
use async_trait::async_trait;
use std::time::Duration;

/// Backend that waits a fixed delay and then accepts every registration
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl RegistrationBackend for SimulatedBackend {
    async fn register(&self, registration: &RegistrationData) {
        match serde_json::to_string(registration) {
            Ok(payload) => tracing::debug!(%payload, "simulating registration request"),
            Err(err) => tracing::warn!("Failed to serialize registration: {err}"),
        }

        tokio::time::sleep(self.delay).await;

        tracing::debug!(
            days = registration.preferred_days.len(),
            "registration accepted after {:?}",
            self.delay
        );
    }
}
