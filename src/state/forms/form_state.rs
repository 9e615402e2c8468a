//! Registration form state: values, validation errors and submission

use super::field::{cycle_option, Field, FieldKind, RUNNING_DAYS};
use super::registration::{RegistrationData, ValidationErrors};
use crate::backend::RegistrationBackend;
use crate::state::{Notification, Notifier};
use chrono::Weekday;

/// Longest age the numeric input accepts (the form allows 13-100)
const AGE_MAX_DIGITS: usize = 3;

pub const INVALID_TITLE: &str = "Please fix the errors";
pub const INVALID_DESCRIPTION: &str = "Some required fields are missing or invalid.";
pub const SUCCESS_TITLE: &str = "Welcome to the Run Club! 🏃";
pub const SUCCESS_DESCRIPTION: &str =
    "Your registration has been submitted successfully. Check your email for next steps!";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Something on the form that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItem {
    Field(Field),
    PreferredDays,
    Submit,
}

/// Focus order, top to bottom
pub const FORM_ITEMS: [FormItem; 13] = [
    FormItem::Field(Field::FirstName),
    FormItem::Field(Field::LastName),
    FormItem::Field(Field::Email),
    FormItem::Field(Field::Phone),
    FormItem::Field(Field::Age),
    FormItem::Field(Field::ShirtSize),
    FormItem::Field(Field::ExperienceLevel),
    FormItem::Field(Field::RunningGoals),
    FormItem::PreferredDays,
    FormItem::Field(Field::EmergencyContact),
    FormItem::Field(Field::EmergencyPhone),
    FormItem::Field(Field::MedicalConditions),
    FormItem::Submit,
];

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected,
    /// The backend accepted the registration and the form was reset
    Submitted,
}

/// The registration form controller.
///
/// Holds two states: idle and submitting. A valid submission moves it to
/// submitting; completion always moves it back to idle.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    data: RegistrationData,
    errors: ValidationErrors,
    submitting: bool,
    pub active_field_index: usize,
    /// Highlighted day in the availability picker
    pub day_cursor: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Set a field and clear any error it was showing, without re-validating
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
        if self.errors.contains(field) {
            self.errors.clear(field);
        }
    }

    /// Add the day if absent, remove it if present
    pub fn toggle_day(&mut self, day: Weekday) {
        if self.data.has_day(day) {
            self.data.preferred_days.retain(|d| *d != day);
        } else {
            self.data.preferred_days.push(day);
        }
    }

    /// Recompute every error from scratch; true when the form is valid
    pub fn validate(&mut self) -> bool {
        self.errors = ValidationErrors::check(&self.data);
        self.errors.is_empty()
    }

    /// First half of a submission.
    ///
    /// On invalid input, notifies and leaves the form untouched. Otherwise
    /// enters the submitting state and returns the record to send.
    pub fn begin_submit<N>(&mut self, notifier: &mut N) -> Option<RegistrationData>
    where
        N: Notifier + ?Sized,
    {
        if !self.validate() {
            let missing: Vec<_> = self.errors.fields().map(Field::key).collect();
            tracing::debug!(?missing, "registration rejected");
            notifier.notify(Notification::destructive(
                INVALID_TITLE,
                INVALID_DESCRIPTION,
            ));
            return None;
        }

        tracing::debug!("submitting registration");
        self.submitting = true;
        Some(self.data.clone())
    }

    /// Second half of a submission: announce success, reset, go idle
    pub fn complete_submit<N>(&mut self, notifier: &mut N)
    where
        N: Notifier + ?Sized,
    {
        notifier.notify(Notification::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
        self.data = RegistrationData::default();
        self.submitting = false;
        tracing::debug!("registration submitted");
    }

    /// Validate, send to the backend, and reset on success
    #[allow(dead_code)] // App drives begin_submit/complete_submit itself to keep drawing
    pub async fn submit<B, N>(&mut self, backend: &B, notifier: &mut N) -> SubmitOutcome
    where
        B: RegistrationBackend + ?Sized,
        N: Notifier + ?Sized,
    {
        let Some(registration) = self.begin_submit(notifier) else {
            return SubmitOutcome::Rejected;
        };
        backend.register(&registration).await;
        self.complete_submit(notifier);
        SubmitOutcome::Submitted
    }

    /// Item that currently holds focus
    pub fn active_item(&self) -> FormItem {
        FORM_ITEMS[self.active_field_index.min(FORM_ITEMS.len() - 1)]
    }

    /// Field under focus, if focus is on a field
    pub fn active_input(&self) -> Option<Field> {
        match self.active_item() {
            FormItem::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_input() else {
            return;
        };
        let current = self.data.value(field);
        let accepted = match field.kind() {
            FieldKind::Text | FieldKind::Multiline => true,
            FieldKind::Numeric => c.is_ascii_digit() && current.len() < AGE_MAX_DIGITS,
            FieldKind::Select => false,
        };
        if accepted {
            let mut value = current.to_string();
            value.push(c);
            self.update(field, value);
        }
    }

    /// Start a new line in a multi-line field
    pub fn input_newline(&mut self) {
        if let Some(field) = self.active_input() {
            if field.kind() == FieldKind::Multiline {
                let value = format!("{}\n", self.data.value(field));
                self.update(field, value);
            }
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.active_input() else {
            return;
        };
        if field.kind() == FieldKind::Select {
            return;
        }
        let mut value = self.data.value(field).to_string();
        if value.pop().is_some() {
            self.update(field, value);
        }
    }

    /// Move the focused selection to the next or previous option
    pub fn cycle_selection(&mut self, forward: bool) {
        let Some(field) = self.active_input() else {
            return;
        };
        if let Some(value) = cycle_option(field, self.data.value(field), forward) {
            self.update(field, value);
        }
    }

    pub fn move_day_cursor(&mut self, forward: bool) {
        let count = RUNNING_DAYS.len();
        self.day_cursor = if forward {
            (self.day_cursor + 1) % count
        } else if self.day_cursor == 0 {
            count - 1
        } else {
            self.day_cursor - 1
        };
    }

    /// Toggle the day under the picker cursor
    pub fn toggle_day_at_cursor(&mut self) {
        let day = RUNNING_DAYS[self.day_cursor % RUNNING_DAYS.len()];
        self.toggle_day(day);
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FORM_ITEMS.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FORM_ITEMS.len() - 1);
    }
}
