mod options;
mod runtime;
mod signup;
mod status;
mod terminal;

pub use options::UiOptions;
pub use signup::SignupForm;
