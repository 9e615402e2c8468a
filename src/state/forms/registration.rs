//! Registration record and its validation errors

use super::field::{day_name, Field, FieldKind};
use chrono::Weekday;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Everything a runner fills in on the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub experience_level: String,
    pub running_goals: String,
    #[serde(serialize_with = "serialize_days")]
    pub preferred_days: Vec<Weekday>,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub medical_conditions: String,
    pub shirt_size: String,
}

/// Days go out by full name ("Monday"), as the club's records keep them
fn serialize_days<S: Serializer>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(days.iter().map(|day| day_name(*day)))
}

impl RegistrationData {
    /// Current value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Age => &self.age,
            Field::ShirtSize => &self.shirt_size,
            Field::ExperienceLevel => &self.experience_level,
            Field::RunningGoals => &self.running_goals,
            Field::EmergencyContact => &self.emergency_contact,
            Field::EmergencyPhone => &self.emergency_phone,
            Field::MedicalConditions => &self.medical_conditions,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Age => &mut self.age,
            Field::ShirtSize => &mut self.shirt_size,
            Field::ExperienceLevel => &mut self.experience_level,
            Field::RunningGoals => &mut self.running_goals,
            Field::EmergencyContact => &mut self.emergency_contact,
            Field::EmergencyPhone => &mut self.emergency_phone,
            Field::MedicalConditions => &mut self.medical_conditions,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: Field, value: String) {
        *self.value_mut(field) = value;
    }

    pub fn has_day(&self, day: Weekday) -> bool {
        self.preferred_days.contains(&day)
    }

    /// Whether a required field counts as filled in.
    ///
    /// Typed fields are trimmed first; a selection only has to be non-empty.
    pub fn is_present(&self, field: Field) -> bool {
        let value = self.value(field);
        match field.kind() {
            FieldKind::Select => !value.is_empty(),
            _ => !value.trim().is_empty(),
        }
    }
}

/// Per-field validation messages, rebuilt wholesale on every validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Check every required field of a record
    pub fn check(data: &RegistrationData) -> Self {
        let messages = Field::ALL
            .iter()
            .filter(|field| field.is_required() && !data.is_present(**field))
            .map(|field| (*field, field.required_message().to_string()))
            .collect();
        Self { messages }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    /// Drop the message for one field, returning whether one was set
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Fields that currently carry an error, in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.messages.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_empty_record() {
        let data = RegistrationData::default();
        for field in Field::ALL {
            assert_eq!(data.value(field), "");
        }
        assert!(data.preferred_days.is_empty());
    }

    #[test]
    fn test_set_and_value() {
        let mut data = RegistrationData::default();
        data.set(Field::EmergencyPhone, "5559876543".to_string());
        assert_eq!(data.emergency_phone, "5559876543");
        assert_eq!(data.value(Field::EmergencyPhone), "5559876543");
    }

    #[test]
    fn test_whitespace_text_is_not_present() {
        let mut data = RegistrationData::default();
        data.set(Field::FirstName, "   ".to_string());
        assert!(!data.is_present(Field::FirstName));
    }

    #[test]
    fn test_any_non_empty_selection_is_present() {
        let mut data = RegistrationData::default();
        data.set(Field::ShirtSize, " ".to_string());
        assert!(data.is_present(Field::ShirtSize));
    }

    #[test]
    fn test_check_empty_record_flags_every_required_field() {
        let errors = ValidationErrors::check(&RegistrationData::default());
        let flagged: Vec<_> = errors.fields().collect();
        let required: Vec<_> = Field::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(flagged, required);
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
    }

    #[test]
    fn test_clear_reports_whether_message_existed() {
        let mut errors = ValidationErrors::check(&RegistrationData::default());
        assert!(errors.clear(Field::Email));
        assert!(!errors.clear(Field::Email));
        assert!(!errors.contains(Field::Email));
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let data = RegistrationData {
            first_name: "Alex".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["firstName"], "Alex");
        assert!(json.get("preferredDays").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_preferred_days_serialize_as_full_names() {
        let data = RegistrationData {
            preferred_days: vec![Weekday::Sat, Weekday::Mon],
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["preferredDays"], serde_json::json!(["Saturday", "Monday"]));
    }
}
