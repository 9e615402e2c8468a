//! Form domain layer
//!
//! Field catalog, the registration record with its validation errors, and
//! the form controller that owns them.

mod field;
mod form_state;
mod registration;

pub use field::{day_name, find_option, Field, FieldKind, RUNNING_DAYS};
pub use form_state::{Form, FormItem, RegistrationForm};
pub use registration::RegistrationData;

#[cfg(test)]
pub use form_state::{FORM_ITEMS, INVALID_TITLE, SUCCESS_TITLE};
