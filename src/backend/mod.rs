//! Registration backend the form submits to

mod simulated;
mod traits;

pub use simulated::SimulatedBackend;
pub use traits::RegistrationBackend;

#[cfg(test)]
pub use traits::MockRegistrationBackend;
