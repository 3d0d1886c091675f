use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::validate::{self, ErrorMap};

use super::record::{FieldId, FormRecord, Gender, INTEREST_OPTIONS};

/// Interactive state of one form instance: the record being edited, the
/// error map from the last submit attempt, and focus bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    record: FormRecord,
    errors: ErrorMap,
    focus: usize,
    interest_cursor: usize,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FieldId) -> Option<&'static str> {
        self.errors.message(field)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn focused(&self) -> FieldId {
        FieldId::ALL[self.focus]
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn interest_cursor(&self) -> usize {
        self.interest_cursor
    }

    pub fn focus_next_field(&mut self) {
        self.focus = (self.focus + 1) % FieldId::ALL.len();
    }

    pub fn focus_prev_field(&mut self) {
        self.focus = if self.focus == 0 {
            FieldId::ALL.len() - 1
        } else {
            self.focus - 1
        };
    }

    /// Runs the validator against the current record and replaces the
    /// displayed error map with the outcome. Returns true when the record is
    /// valid.
    pub fn submit(&mut self) -> bool {
        self.errors = validate::validate(&self.record);
        self.errors.is_empty()
    }

    /// Routes a key to the focused field. Returns true when the key edited
    /// the field.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match self.focused() {
            FieldId::Gender => self.handle_gender_key(key),
            FieldId::Interests => self.handle_interests_key(key),
            FieldId::Age => self.handle_age_key(key),
            field => self.handle_text_key(field, key),
        }
    }

    fn handle_text_key(&mut self, field: FieldId, key: &KeyEvent) -> bool {
        let Some(buffer) = self.record.text_mut(field) else {
            return false;
        };
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }
                buffer.push(c);
                self.after_edit();
                true
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.after_edit();
                true
            }
            KeyCode::Delete => {
                buffer.clear();
                self.after_edit();
                true
            }
            _ => false,
        }
    }

    fn handle_age_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.step_age(-1),
            KeyCode::Right => self.step_age(1),
            _ => self.handle_text_key(FieldId::Age, key),
        }
    }

    // Left/Right stepping only applies while the buffer holds an integer
    // (or is empty); free-typed text is left alone.
    fn step_age(&mut self, delta: i64) -> bool {
        let current = if self.record.age.trim().is_empty() {
            Some(0)
        } else {
            self.record.age.trim().parse::<i64>().ok()
        };
        let Some(current) = current else {
            return false;
        };
        self.record.age = current.saturating_add(delta).max(0).to_string();
        self.after_edit();
        true
    }

    fn handle_gender_key(&mut self, key: &KeyEvent) -> bool {
        let delta = match key.code {
            KeyCode::Left => -1,
            KeyCode::Right | KeyCode::Char(' ') => 1,
            _ => return false,
        };
        self.cycle_gender(delta);
        self.after_edit();
        true
    }

    fn cycle_gender(&mut self, delta: i32) {
        let len = Gender::ALL.len() as i32;
        let next = match self.record.gender {
            None => {
                if delta > 0 {
                    0
                } else {
                    len - 1
                }
            }
            Some(current) => {
                let index = Gender::ALL
                    .iter()
                    .position(|gender| *gender == current)
                    .unwrap_or(0) as i32;
                ((index + delta) % len + len) % len
            }
        };
        self.record.gender = Some(Gender::ALL[next as usize]);
    }

    fn handle_interests_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => {
                self.interest_cursor = if self.interest_cursor == 0 {
                    INTEREST_OPTIONS.len() - 1
                } else {
                    self.interest_cursor - 1
                };
                true
            }
            KeyCode::Right => {
                self.interest_cursor = (self.interest_cursor + 1) % INTEREST_OPTIONS.len();
                true
            }
            KeyCode::Char(' ') => {
                let option = INTEREST_OPTIONS[self.interest_cursor];
                let checked = !self.record.has_interest(option);
                self.record.toggle_interest(option, checked);
                self.after_edit();
                true
            }
            _ => false,
        }
    }

    fn after_edit(&mut self) {
        self.dirty = true;
    }

    /// The value shown next to a field's label.
    pub fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::Gender => self
                .record
                .gender
                .map(|gender| gender.as_str().to_string())
                .unwrap_or_else(|| "Select gender".to_string()),
            FieldId::Interests => self.interests_row(),
            field if field.is_secret() => {
                let len = self.record.text(field).map(|text| text.chars().count());
                "•".repeat(len.unwrap_or(0))
            }
            field => self.record.text(field).unwrap_or_default().to_string(),
        }
    }

    fn interests_row(&self) -> String {
        let focused = self.focused() == FieldId::Interests;
        INTEREST_OPTIONS
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let mark = if self.record.has_interest(option) {
                    'x'
                } else {
                    ' '
                };
                if focused && index == self.interest_cursor {
                    format!("‹[{mark}] {option}›")
                } else {
                    format!("[{mark}] {option}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut FormState, text: &str) {
        for c in text.chars() {
            assert!(state.handle_key(&press(KeyCode::Char(c))));
        }
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut state = FormState::new();
        state.focus_prev_field();
        assert_eq!(state.focused(), FieldId::BirthDate);
        state.focus_next_field();
        assert_eq!(state.focused(), FieldId::FirstName);
    }

    #[test]
    fn typing_edits_the_focused_text_field() {
        let mut state = FormState::new();
        type_text(&mut state, "Jane");
        assert_eq!(state.record().first_name, "Jane");
        assert!(state.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(state.record().first_name, "Jan");
        assert!(state.handle_key(&press(KeyCode::Delete)));
        assert!(state.record().first_name.is_empty());
        assert!(state.is_dirty());
    }

    #[test]
    fn control_chords_do_not_edit() {
        let mut state = FormState::new();
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!state.handle_key(&chord));
        assert!(state.record().first_name.is_empty());
        assert!(!state.is_dirty());
    }

    #[test]
    fn gender_cycles_through_options() {
        let mut state = FormState::new();
        while state.focused() != FieldId::Gender {
            state.focus_next_field();
        }
        assert!(state.handle_key(&press(KeyCode::Right)));
        assert_eq!(state.record().gender, Some(Gender::Male));
        assert!(state.handle_key(&press(KeyCode::Left)));
        assert_eq!(state.record().gender, Some(Gender::Other));
    }

    #[test]
    fn space_toggles_the_interest_under_the_cursor() {
        let mut state = FormState::new();
        while state.focused() != FieldId::Interests {
            state.focus_next_field();
        }
        assert!(state.handle_key(&press(KeyCode::Right)));
        assert!(state.handle_key(&press(KeyCode::Char(' '))));
        assert_eq!(state.record().interests, vec!["Coding".to_string()]);
        assert!(state.handle_key(&press(KeyCode::Char(' '))));
        assert!(state.record().interests.is_empty());
    }

    #[test]
    fn age_steps_with_arrow_keys() {
        let mut state = FormState::new();
        while state.focused() != FieldId::Age {
            state.focus_next_field();
        }
        assert!(state.handle_key(&press(KeyCode::Right)));
        assert_eq!(state.record().age, "1");
        assert!(state.handle_key(&press(KeyCode::Left)));
        assert!(state.handle_key(&press(KeyCode::Left)));
        assert_eq!(state.record().age, "0");
    }

    #[test]
    fn submit_replaces_the_error_map_wholesale() {
        let mut state = FormState::new();
        assert!(!state.submit());
        assert_eq!(state.error_count(), FieldId::ALL.len());

        type_text(&mut state, "Jane");
        assert!(!state.submit());
        assert_eq!(state.error_for(FieldId::FirstName), None);
        assert_eq!(state.error_count(), FieldId::ALL.len() - 1);
    }

    #[test]
    fn secret_fields_render_masked() {
        let mut state = FormState::new();
        while state.focused() != FieldId::Password {
            state.focus_next_field();
        }
        type_text(&mut state, "Abcd1234");
        assert_eq!(state.display_value(FieldId::Password), "•".repeat(8));
    }

    #[test]
    fn unselected_gender_shows_placeholder() {
        let state = FormState::new();
        assert_eq!(state.display_value(FieldId::Gender), "Select gender");
    }

    #[test]
    fn interests_row_marks_checked_options_and_cursor() {
        let mut state = FormState::new();
        while state.focused() != FieldId::Interests {
            state.focus_next_field();
        }
        assert!(state.handle_key(&press(KeyCode::Char(' '))));
        let row = state.display_value(FieldId::Interests);
        assert!(row.contains("‹[x] Movies›"), "row was {row:?}");
        assert!(row.contains("[ ] Coding"));
    }
}
