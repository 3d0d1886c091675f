use serde::Serialize;

/// The interests offered by the form, in display order.
pub const INTEREST_OPTIONS: [&str; 3] = ["Movies", "Coding", "Music"];

/// Identifies one of the declared form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    Gender,
    Interests,
    BirthDate,
}

impl FieldId {
    /// All fields in declared order. Focus traversal and error collection
    /// both follow this order.
    pub const ALL: [FieldId; 9] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Age,
        FieldId::Gender,
        FieldId::Interests,
        FieldId::BirthDate,
    ];

    /// The payload key for this field.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Age => "age",
            FieldId::Gender => "gender",
            FieldId::Interests => "interests",
            FieldId::BirthDate => "birthDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm password",
            FieldId::Age => "Age",
            FieldId::Gender => "Gender",
            FieldId::Interests => "Interests",
            FieldId::BirthDate => "Birth date",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == value)
    }
}

impl Serialize for Gender {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Current values of every form field. Created all-empty, each field mutated
/// independently by its input handler, serialized as the submission payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Kept as entered; parsed as a number during validation.
    pub age: String,
    pub gender: Option<Gender>,
    pub interests: Vec<String>,
    /// `YYYY-MM-DD`, parsed during validation.
    pub birth_date: String,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the named field's value. No validation happens here.
    /// Interests change through [`FormRecord::toggle_interest`] and are left
    /// untouched by this method.
    pub fn update_field(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Gender => self.gender = Gender::from_str(&value),
            FieldId::Interests => {}
            _ => {
                if let Some(buffer) = self.text_mut(field) {
                    *buffer = value;
                }
            }
        }
    }

    /// Checked: appends the interest if absent. Unchecked: removes every
    /// occurrence. Idempotent per value.
    pub fn toggle_interest(&mut self, value: &str, checked: bool) {
        if checked {
            if !self.has_interest(value) {
                self.interests.push(value.to_string());
            }
        } else {
            self.interests.retain(|interest| interest != value);
        }
    }

    pub fn has_interest(&self, value: &str) -> bool {
        self.interests.iter().any(|interest| interest == value)
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::FirstName => Some(&self.first_name),
            FieldId::LastName => Some(&self.last_name),
            FieldId::Email => Some(&self.email),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            FieldId::Age => Some(&self.age),
            FieldId::BirthDate => Some(&self.birth_date),
            FieldId::Gender | FieldId::Interests => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Age => Some(&mut self.age),
            FieldId::BirthDate => Some(&mut self.birth_date),
            FieldId::Gender | FieldId::Interests => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_field_replaces_text_values() {
        let mut record = FormRecord::new();
        record.update_field(FieldId::FirstName, "Jane");
        record.update_field(FieldId::FirstName, "Janet");
        assert_eq!(record.first_name, "Janet");
    }

    #[test]
    fn update_field_parses_gender_wire_values() {
        let mut record = FormRecord::new();
        record.update_field(FieldId::Gender, "female");
        assert_eq!(record.gender, Some(Gender::Female));
        record.update_field(FieldId::Gender, "");
        assert_eq!(record.gender, None);
    }

    #[test]
    fn interest_toggle_is_idempotent() {
        let mut record = FormRecord::new();
        record.toggle_interest("Music", true);
        record.toggle_interest("Music", true);
        assert_eq!(record.interests, vec!["Music".to_string()]);
        record.toggle_interest("Music", false);
        assert!(record.interests.is_empty());
    }

    #[test]
    fn distinct_interests_are_both_kept() {
        let mut record = FormRecord::new();
        record.toggle_interest("Movies", true);
        record.toggle_interest("Coding", true);
        assert!(record.has_interest("Movies"));
        assert!(record.has_interest("Coding"));
        assert_eq!(record.interests.len(), 2);
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let mut record = FormRecord::new();
        record.update_field(FieldId::FirstName, "Jane");
        record.update_field(FieldId::Gender, "other");
        let payload = serde_json::to_value(&record).unwrap();
        assert_eq!(payload["firstName"], "Jane");
        assert_eq!(payload["gender"], "other");
        assert!(payload["confirmPassword"].is_string());
    }
}
