use anyhow::Result;

use crate::form::FormRecord;

use super::{options::UiOptions, runtime::App};

/// Builds and runs the signup form.
///
/// ```no_run
/// # fn main() -> anyhow::Result<()> {
/// use signupui::SignupForm;
///
/// let record = SignupForm::new().with_title("Create your account").run()?;
/// println!("{}", record.email);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SignupForm {
    title: Option<String>,
    options: UiOptions,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the interactive form to completion. `Ok` carries the validated
    /// record; `Err` means the user quit without submitting.
    pub fn run(self) -> Result<FormRecord> {
        let SignupForm { title, options } = self;
        let mut app = App::new(title, options);
        app.run()
    }
}
