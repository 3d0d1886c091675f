//! Submit-time validation: a static declarative ruleset evaluated against
//! the whole record with collect-all semantics. Every field is checked on
//! every pass; for a failing field only its first violated rule's message is
//! kept; passing fields are absent from the result.

mod rules;

use indexmap::IndexMap;

use crate::form::{FieldId, FormRecord};

pub use rules::{MAX_AGE, MIN_AGE, MIN_INTERESTS, MIN_PASSWORD_LEN, rules};

/// One predicate + message pair. Rules for a field run in declared order.
pub struct Rule {
    pub message: &'static str,
    pub check: fn(&FormRecord) -> bool,
}

/// A single field's failure: the field path plus the retained message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// The messages currently displayed, one per invalid field, in declared
/// field order. Fully replaced (never merged) on every submit attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorMap {
    entries: IndexMap<FieldId, &'static str>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn message(&self, field: FieldId) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, *message))
    }
}

impl FromIterator<FieldError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|error| (error.field, error.message))
                .collect(),
        }
    }
}

/// Evaluates every field's rules against the record. `Err` carries one
/// [`FieldError`] per failing field, in declared field order.
pub fn run(record: &FormRecord) -> Result<(), Vec<FieldError>> {
    let mut failures = Vec::new();
    for field in FieldId::ALL {
        if let Some(rule) = rules(field).iter().find(|rule| !(rule.check)(record)) {
            failures.push(FieldError {
                field,
                message: rule.message,
            });
        }
    }
    if failures.is_empty() { Ok(()) } else { Err(failures) }
}

/// The submit-time entry point: an empty map means the record is valid.
pub fn validate(record: &FormRecord) -> ErrorMap {
    match run(record) {
        Ok(()) => ErrorMap::new(),
        Err(failures) => failures.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;

    fn valid_record() -> FormRecord {
        let mut record = FormRecord::new();
        record.update_field(FieldId::FirstName, "Jane");
        record.update_field(FieldId::LastName, "Doe");
        record.update_field(FieldId::Email, "jane@x.com");
        record.update_field(FieldId::Password, "Abcd1234");
        record.update_field(FieldId::ConfirmPassword, "Abcd1234");
        record.update_field(FieldId::Age, "25");
        record.update_field(FieldId::Gender, "female");
        record.toggle_interest("Music", true);
        record.update_field(FieldId::BirthDate, "2000-01-01");
        record
    }

    #[test]
    fn empty_record_reports_every_field_once() {
        let errors = validate(&FormRecord::new());
        assert_eq!(errors.len(), FieldId::ALL.len());
        assert_eq!(
            errors.message(FieldId::FirstName),
            Some("First name is required")
        );
        assert_eq!(errors.message(FieldId::LastName), Some("Last name is required"));
        assert_eq!(errors.message(FieldId::Email), Some("Email is required"));
        assert_eq!(errors.message(FieldId::Password), Some("Password is required"));
        assert_eq!(
            errors.message(FieldId::ConfirmPassword),
            Some("Confirm password is required")
        );
        assert_eq!(errors.message(FieldId::Age), Some("Age is required"));
        assert_eq!(errors.message(FieldId::Gender), Some("Gender is required"));
        assert_eq!(
            errors.message(FieldId::Interests),
            Some("Select at least one interest")
        );
        assert_eq!(
            errors.message(FieldId::BirthDate),
            Some("Birth Date is required")
        );
    }

    #[test]
    fn first_failing_password_rule_wins() {
        let mut record = valid_record();
        record.update_field(FieldId::Password, "abc");
        record.update_field(FieldId::ConfirmPassword, "abc");
        let errors = validate(&record);
        assert_eq!(
            errors.message(FieldId::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn password_missing_digit_reports_number_rule() {
        let mut record = valid_record();
        record.update_field(FieldId::Password, "Abcdefgh");
        record.update_field(FieldId::ConfirmPassword, "Abcdefgh");
        let errors = validate(&record);
        assert_eq!(
            errors.message(FieldId::Password),
            Some("Password must contain at least one number")
        );
        assert_eq!(errors.message(FieldId::ConfirmPassword), None);
    }

    #[test]
    fn confirmation_passes_when_equal_even_if_password_invalid() {
        let mut record = valid_record();
        record.update_field(FieldId::Password, "weak");
        record.update_field(FieldId::ConfirmPassword, "weak");
        let errors = validate(&record);
        assert!(errors.message(FieldId::Password).is_some());
        assert_eq!(errors.message(FieldId::ConfirmPassword), None);
    }

    #[test]
    fn confirmation_mismatch_is_reported() {
        let mut record = valid_record();
        record.update_field(FieldId::ConfirmPassword, "Abcd12345");
        let errors = validate(&record);
        assert_eq!(
            errors.message(FieldId::ConfirmPassword),
            Some("Passwords must match")
        );
        assert_eq!(errors.message(FieldId::Password), None);
    }

    #[test]
    fn age_bounds_and_type_messages() {
        let cases = [
            ("17", Some("You must be at least 18 years old")),
            ("59", Some("You must be less than 58 years old")),
            ("abc", Some("Age must be a number")),
            ("30", None),
            ("18", None),
            ("58", None),
        ];
        for (input, expected) in cases {
            let mut record = valid_record();
            record.update_field(FieldId::Age, input);
            let errors = validate(&record);
            assert_eq!(errors.message(FieldId::Age), expected, "age input {input:?}");
        }
    }

    #[test]
    fn email_format_is_checked_after_presence() {
        let mut record = valid_record();
        record.update_field(FieldId::Email, "not-an-email");
        let errors = validate(&record);
        assert_eq!(errors.message(FieldId::Email), Some("Invalid Email Format"));
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let mut record = valid_record();
        record.update_field(FieldId::BirthDate, "2000-02-31");
        let errors = validate(&record);
        assert_eq!(
            errors.message(FieldId::BirthDate),
            Some("Birth Date must be a valid date")
        );
    }

    #[test]
    fn fully_valid_record_clears_the_map() {
        let errors = validate(&valid_record());
        assert!(errors.is_empty());
        assert!(run(&valid_record()).is_ok());
    }

    #[test]
    fn fixing_one_field_drops_only_its_message() {
        let mut record = valid_record();
        record.update_field(FieldId::Email, "bad");
        record.update_field(FieldId::Age, "17");
        let before = validate(&record);
        assert_eq!(before.len(), 2);

        record.update_field(FieldId::Email, "jane@x.com");
        let after = validate(&record);
        assert_eq!(after.message(FieldId::Email), None);
        assert_eq!(
            after.message(FieldId::Age),
            before.message(FieldId::Age)
        );
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn failures_follow_declared_field_order() {
        let errors = validate(&FormRecord::new());
        let fields: Vec<FieldId> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, FieldId::ALL.to_vec());
    }

    #[test]
    fn field_error_display_includes_path() {
        let error = FieldError {
            field: FieldId::FirstName,
            message: "First name is required",
        };
        assert_eq!(error.to_string(), "firstName: First name is required");
    }
}
