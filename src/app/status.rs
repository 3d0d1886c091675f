#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Enter to submit.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn submitted(&mut self) {
        self.message = "Form submitted successfully".to_string();
    }

    pub fn fields_invalid(&mut self, count: usize) {
        self.message = format!("{count} field(s) need attention");
    }

    pub fn pending_exit(&mut self) {
        self.message =
            "Unsaved input. Press Ctrl+Q again to quit without submitting.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
