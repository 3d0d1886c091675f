use anyhow::Result;
use signupui::{SignupForm, emit_payload};

fn main() -> Result<()> {
    let record = SignupForm::new().with_title("Create your account").run()?;
    emit_payload(&record)?;
    Ok(())
}
