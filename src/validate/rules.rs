use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::form::{FieldId, FormRecord};

use super::Rule;

/// Product constants. The 58-year upper bound is a product decision.
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 58.0;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_INTERESTS: usize = 1;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// The ordered rule table for one field. First failing rule wins.
pub fn rules(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::FirstName => &[Rule {
            message: "First name is required",
            check: first_name_present,
        }],
        FieldId::LastName => &[Rule {
            message: "Last name is required",
            check: last_name_present,
        }],
        FieldId::Email => &[
            Rule {
                message: "Email is required",
                check: email_present,
            },
            Rule {
                message: "Invalid Email Format",
                check: email_well_formed,
            },
        ],
        FieldId::Password => &[
            Rule {
                message: "Password is required",
                check: password_present,
            },
            Rule {
                message: "Password must be at least 8 characters",
                check: password_long_enough,
            },
            Rule {
                message: "Password must contain at least one number",
                check: password_has_digit,
            },
            Rule {
                message: "Password must contain at least one uppercase letter",
                check: password_has_uppercase,
            },
            Rule {
                message: "Password must contain at least one lowercase letter",
                check: password_has_lowercase,
            },
        ],
        FieldId::ConfirmPassword => &[
            Rule {
                message: "Confirm password is required",
                check: confirm_password_present,
            },
            Rule {
                message: "Passwords must match",
                check: passwords_match,
            },
        ],
        FieldId::Age => &[
            Rule {
                message: "Age is required",
                check: age_present,
            },
            Rule {
                message: "Age must be a number",
                check: age_is_numeric,
            },
            Rule {
                message: "You must be at least 18 years old",
                check: age_above_minimum,
            },
            Rule {
                message: "You must be less than 58 years old",
                check: age_below_maximum,
            },
        ],
        FieldId::Gender => &[Rule {
            message: "Gender is required",
            check: gender_selected,
        }],
        FieldId::Interests => &[Rule {
            message: "Select at least one interest",
            check: enough_interests,
        }],
        FieldId::BirthDate => &[
            Rule {
                message: "Birth Date is required",
                check: birth_date_present,
            },
            Rule {
                message: "Birth Date must be a valid date",
                check: birth_date_parses,
            },
        ],
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn parsed_age(record: &FormRecord) -> Option<f64> {
    record.age.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn first_name_present(record: &FormRecord) -> bool {
    present(&record.first_name)
}

fn last_name_present(record: &FormRecord) -> bool {
    present(&record.last_name)
}

fn email_present(record: &FormRecord) -> bool {
    present(&record.email)
}

fn email_well_formed(record: &FormRecord) -> bool {
    EMAIL_PATTERN.is_match(record.email.trim())
}

fn password_present(record: &FormRecord) -> bool {
    present(&record.password)
}

fn password_long_enough(record: &FormRecord) -> bool {
    record.password.chars().count() >= MIN_PASSWORD_LEN
}

fn password_has_digit(record: &FormRecord) -> bool {
    record.password.chars().any(|c| c.is_ascii_digit())
}

fn password_has_uppercase(record: &FormRecord) -> bool {
    record.password.chars().any(|c| c.is_uppercase())
}

fn password_has_lowercase(record: &FormRecord) -> bool {
    record.password.chars().any(|c| c.is_lowercase())
}

fn confirm_password_present(record: &FormRecord) -> bool {
    present(&record.confirm_password)
}

// Reads the full record: passing depends only on equality with the current
// password, never on the password's own rules.
fn passwords_match(record: &FormRecord) -> bool {
    record.confirm_password == record.password
}

fn age_present(record: &FormRecord) -> bool {
    present(&record.age)
}

fn age_is_numeric(record: &FormRecord) -> bool {
    parsed_age(record).is_some()
}

fn age_above_minimum(record: &FormRecord) -> bool {
    parsed_age(record).is_none_or(|age| age >= MIN_AGE)
}

fn age_below_maximum(record: &FormRecord) -> bool {
    parsed_age(record).is_none_or(|age| age <= MAX_AGE)
}

fn gender_selected(record: &FormRecord) -> bool {
    record.gender.is_some()
}

fn enough_interests(record: &FormRecord) -> bool {
    record.interests.len() >= MIN_INTERESTS
}

fn birth_date_present(record: &FormRecord) -> bool {
    present(&record.birth_date)
}

fn birth_date_parses(record: &FormRecord) -> bool {
    NaiveDate::parse_from_str(record.birth_date.trim(), BIRTH_DATE_FORMAT).is_ok()
}
