use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    form::{FormRecord, FormState},
    ui::{self, UiContext},
};

use super::{options::UiOptions, status::StatusLine, terminal::TerminalGuard};

const HELP_TEXT: &str =
    "Tab/Shift+Tab move • Left/Right choose • Space toggle • Enter submit • Ctrl+Q quit";

pub struct App {
    title: Option<String>,
    state: FormState,
    options: UiOptions,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    result: Option<FormRecord>,
}

impl App {
    pub fn new(title: Option<String>, options: UiOptions) -> Self {
        Self {
            title,
            state: FormState::new(),
            options,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<FormRecord> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };
        ui::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                state: &self.state,
                status_message: self.status.message(),
                dirty: self.state.is_dirty(),
                error_count: self.state.error_count(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_submit();
                    return;
                }
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('c')
                | KeyCode::Char('C') => {
                    self.on_exit();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Enter => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.focus_next_field();
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.focus_prev_field();
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            _ => {
                if self.state.handle_key(&key) {
                    self.exit_armed = false;
                    self.status.editing(self.state.focused().label());
                }
            }
        }
    }

    fn on_submit(&mut self) {
        if self.state.submit() {
            self.status.submitted();
            self.result = Some(self.state.record().clone());
            self.should_quit = true;
        } else {
            self.status.fields_invalid(self.state.error_count());
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.state.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
        self.result = None;
    }
}
