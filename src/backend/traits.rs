//! Trait abstraction for the registration backend to enable mocking in tests

use crate::state::RegistrationData;
use async_trait::async_trait;

/// Where a validated registration is sent.
///
/// There is no failure path: the club has no real endpoint yet, so every
/// implementation is expected to complete once the request has been handled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Submit a registration and wait for it to be accepted
    async fn register(&self, registration: &RegistrationData);
}
