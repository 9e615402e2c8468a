//! Registration field catalog

use chrono::Weekday;

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Digits only (numeric input)
    Numeric,
    /// One value out of a fixed option list
    Select,
    /// Multi-line free text
    Multiline,
}

/// One named, independently editable attribute of the registration record.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Age,
    ShirtSize,
    ExperienceLevel,
    RunningGoals,
    EmergencyContact,
    EmergencyPhone,
    MedicalConditions,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Age,
        Field::ShirtSize,
        Field::ExperienceLevel,
        Field::RunningGoals,
        Field::EmergencyContact,
        Field::EmergencyPhone,
        Field::MedicalConditions,
    ];

    /// camelCase key used in the serialized record
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Age => "age",
            Field::ShirtSize => "shirtSize",
            Field::ExperienceLevel => "experienceLevel",
            Field::RunningGoals => "runningGoals",
            Field::EmergencyContact => "emergencyContact",
            Field::EmergencyPhone => "emergencyPhone",
            Field::MedicalConditions => "medicalConditions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "What's your first name? *",
            Field::LastName => "And your last name? *",
            Field::Email => "Email address *",
            Field::Phone => "Phone number *",
            Field::Age => "Age *",
            Field::ShirtSize => "T-shirt size *",
            Field::ExperienceLevel => "Running experience level *",
            Field::RunningGoals => "What are your running goals?",
            Field::EmergencyContact => "Emergency contact name *",
            Field::EmergencyPhone => "Emergency contact phone *",
            Field::MedicalConditions => "Any medical conditions we should know about?",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter your first name",
            Field::LastName => "Enter your last name",
            Field::Email => "your.email@example.com",
            Field::Phone | Field::EmergencyPhone => "(555) 123-4567",
            Field::Age => "25",
            Field::ShirtSize => "Select your size",
            Field::ExperienceLevel => "Select your level",
            Field::RunningGoals => {
                "Your first 5K, a faster marathon, or just staying healthy!"
            }
            Field::EmergencyContact => "Full name",
            Field::MedicalConditions => "Conditions, allergies, or medications (optional)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Age => FieldKind::Numeric,
            Field::ShirtSize | Field::ExperienceLevel => FieldKind::Select,
            Field::RunningGoals | Field::MedicalConditions => FieldKind::Multiline,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::RunningGoals | Field::MedicalConditions)
    }

    /// Message reported when a required field is left empty
    pub fn required_message(self) -> &'static str {
        match self {
            Field::FirstName => "First name is required",
            Field::LastName => "Last name is required",
            Field::Email => "Email is required",
            Field::Phone => "Phone number is required",
            Field::Age => "Age is required",
            Field::ShirtSize => "Shirt size is required",
            Field::ExperienceLevel => "Experience level is required",
            Field::EmergencyContact => "Emergency contact is required",
            Field::EmergencyPhone => "Emergency phone is required",
            Field::RunningGoals | Field::MedicalConditions => "",
        }
    }

    /// Options offered by a select field (empty for free-text fields)
    pub fn options(self) -> &'static [SelectOption] {
        match self {
            Field::ShirtSize => SHIRT_SIZES,
            Field::ExperienceLevel => EXPERIENCE_LEVELS,
            _ => &[],
        }
    }
}

/// An enumerated choice for a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl SelectOption {
    const fn new(value: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            value,
            label,
            description,
        }
    }
}

pub const SHIRT_SIZES: &[SelectOption] = &[
    SelectOption::new("xs", "XS", ""),
    SelectOption::new("s", "S", ""),
    SelectOption::new("m", "M", ""),
    SelectOption::new("l", "L", ""),
    SelectOption::new("xl", "XL", ""),
    SelectOption::new("xxl", "XXL", ""),
];

pub const EXPERIENCE_LEVELS: &[SelectOption] = &[
    SelectOption::new(
        "beginner",
        "Beginner",
        "New to running or getting back into it",
    ),
    SelectOption::new(
        "intermediate",
        "Intermediate",
        "Can run 3-5 miles comfortably",
    ),
    SelectOption::new(
        "advanced",
        "Advanced",
        "Experienced runner, 5+ miles regularly",
    ),
    SelectOption::new(
        "competitive",
        "Competitive",
        "Race regularly, training focused",
    ),
];

/// Find the option matching a stored value
pub fn find_option(field: Field, value: &str) -> Option<(usize, &'static SelectOption)> {
    field
        .options()
        .iter()
        .enumerate()
        .find(|(_, option)| option.value == value)
}

/// Value of the option after (or before) the current one, wrapping around.
/// An empty selection moves to the first (or last) option.
pub fn cycle_option(field: Field, current: &str, forward: bool) -> Option<&'static str> {
    let options = field.options();
    if options.is_empty() {
        return None;
    }
    let count = options.len();
    let next = match find_option(field, current) {
        Some((index, _)) if forward => (index + 1) % count,
        Some((0, _)) => count - 1,
        Some((index, _)) => index - 1,
        None if forward => 0,
        None => count - 1,
    };
    Some(options[next].value)
}

/// Days offered in the availability picker, Monday first
pub const RUNNING_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = Field::ALL
            .iter()
            .filter(|f| !f.is_required())
            .copied()
            .collect();
        assert_eq!(optional, vec![Field::RunningGoals, Field::MedicalConditions]);
    }

    #[test]
    fn test_required_fields_have_messages() {
        for field in Field::ALL.iter().filter(|f| f.is_required()) {
            assert!(!field.required_message().is_empty(), "{field:?}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Field::ALL.len());
    }

    #[test]
    fn test_select_fields_have_options() {
        assert_eq!(Field::ShirtSize.options().len(), 6);
        assert_eq!(Field::ExperienceLevel.options().len(), 4);
        assert!(Field::Email.options().is_empty());
    }

    #[test]
    fn test_cycle_option_from_empty() {
        assert_eq!(cycle_option(Field::ShirtSize, "", true), Some("xs"));
        assert_eq!(cycle_option(Field::ShirtSize, "", false), Some("xxl"));
    }

    #[test]
    fn test_cycle_option_wraps() {
        assert_eq!(cycle_option(Field::ShirtSize, "xxl", true), Some("xs"));
        assert_eq!(cycle_option(Field::ShirtSize, "xs", false), Some("xxl"));
        assert_eq!(
            cycle_option(Field::ExperienceLevel, "beginner", true),
            Some("intermediate")
        );
    }

    #[test]
    fn test_cycle_option_on_text_field() {
        assert_eq!(cycle_option(Field::FirstName, "", true), None);
    }

    #[test]
    fn test_find_option() {
        let (index, option) = find_option(Field::ExperienceLevel, "advanced").unwrap();
        assert_eq!(index, 2);
        assert_eq!(option.label, "Advanced");
        assert!(find_option(Field::ExperienceLevel, "elite").is_none());
    }

    #[test]
    fn test_day_names() {
        let names: Vec<_> = RUNNING_DAYS.iter().map(|d| day_name(*d)).collect();
        assert_eq!(names.first(), Some(&"Monday"));
        assert_eq!(names.last(), Some(&"Sunday"));
    }
}
