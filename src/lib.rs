#![deny(rust_2018_idioms)]

mod app;
mod form;
mod io;
mod ui;
mod validate;

pub use app::{SignupForm, UiOptions};
pub use form::{FieldId, FormRecord, FormState, Gender, INTEREST_OPTIONS};
pub use io::emit_payload;
pub use validate::{ErrorMap, FieldError, MAX_AGE, MIN_AGE, MIN_INTERESTS, MIN_PASSWORD_LEN, validate};

pub mod prelude {
    pub use super::{SignupForm, UiOptions};
}
