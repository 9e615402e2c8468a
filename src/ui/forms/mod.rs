//! Form rendering module
//!
//! - `field_renderer`: single field boxes (text, select, day picker)
//! - `registration_form`: the registration form sections

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
