/// Behaviour knobs for the form runtime.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub confirm_exit: bool,
    pub show_help: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            confirm_exit: true,
            show_help: true,
        }
    }
}

impl UiOptions {
    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}
