//! Interaction controller for the numeric input field
//!
//! `NumberField` owns the display text, the cursor, and the edit state
//! machine (`Idle → Editing → (Blurred | Idle)`). Every text mutation runs
//! one synchronous parse/format pass; the cursor fix that follows a
//! reformat is deferred until the host's next render commit via
//! [`NumberField::after_render`].

pub mod cursor;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::config::FormatConfig;
use crate::format::{self, FormatResult, RawValue};

/// Result of offering a key event to the field
///
/// Tells the host whether the field consumed the event or whether it
/// should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the field
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Edit lifecycle of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No edits since the host last supplied a value
    Idle,
    /// The user has mutated the text
    Editing,
    /// Editing ended; display has been renormalized
    Blurred,
}

/// Change callback: receives the full `(raw, numeric, display)` triple.
///
/// This is the single canonical callback signature (the upstream design
/// shipped two variants; hosts needing less can ignore fields).
pub type ChangeCallback = Box<dyn FnMut(&FormatResult)>;

/// State machine over a single-line numeric text field
///
/// The host owns the source of truth for the value across renders; the
/// field mirrors it and reports every normalization through the change
/// callback. Parse and format never fail: invalid or overflowing input
/// degrades to an empty field until valid text is re-entered.
pub struct NumberField {
    config: FormatConfig,
    /// Mirror of the host's canonical value
    value: Option<String>,
    /// Text currently shown in the field
    display: String,
    /// Cursor as a char offset into `display`
    cursor: usize,
    state: FieldState,
    /// Cursor fix queued until the next render commit
    pending_cursor: Option<usize>,
    on_change: Option<ChangeCallback>,
}

impl NumberField {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            value: None,
            display: String::new(),
            cursor: 0,
            state: FieldState::Idle,
            pending_cursor: None,
            on_change: None,
        }
    }

    /// Builder: seed the field with the host's current value
    pub fn with_value(mut self, value: impl Into<RawValue>) -> Self {
        self.set_value(value);
        self
    }

    /// Builder: register the change callback
    pub fn on_change(mut self, callback: impl FnMut(&FormatResult) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(&FormatResult) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Replace the host-supplied value (initial load path).
    ///
    /// Formats with the initial-load rule (a literal `.` is read as the
    /// canonical decimal point) and does not fire the change callback:
    /// the host already knows this value.
    pub fn set_value(&mut self, value: impl Into<RawValue>) {
        let res = format::format(value, &self.config, true);
        self.value = Some(res.raw);
        self.display = res.display;
        self.cursor = cursor::char_len(&self.display);
        self.pending_cursor = None;
        self.state = FieldState::Idle;
    }

    /// Replace the configuration (it may change per render).
    ///
    /// The display is regenerated from the canonical value under the new
    /// separators right away, so a separator swap never leaves stale text
    /// on screen. No callback: the canonical value does not change.
    pub fn set_config(&mut self, config: FormatConfig) {
        self.config = config;
        if let Some(value) = self.value.take() {
            let res = format::format(value.as_str(), &self.config, true);
            self.value = Some(res.raw);
            self.display = res.display;
            self.cursor = cursor::clamp(&self.display, self.cursor);
            self.pending_cursor = None;
        }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Text currently shown in the field
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Canonical value mirror (empty string after overflow/malformed input)
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Cursor as a char offset into the display text
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Offer a key event to the field.
    ///
    /// Up/Down step the value (the default caret movement is consumed),
    /// Left/Right/Home/End move the cursor, printable chars and
    /// Backspace/Delete edit, Enter blurs. Everything else bubbles up.
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        // Ctrl-/Alt-chords belong to the host (quit, focus switching).
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Handled::No;
        }

        match key.code {
            KeyCode::Up => {
                self.step(1.0);
                Handled::Yes
            }
            KeyCode::Down => {
                self.step(-1.0);
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = cursor::clamp(&self.display, self.cursor + 1);
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = cursor::char_len(&self.display);
                Handled::Yes
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let raw = cursor::remove_at(&self.display, self.cursor - 1);
                    self.commit_edit(raw, self.cursor - 1);
                }
                Handled::Yes
            }
            KeyCode::Delete => {
                if self.cursor < cursor::char_len(&self.display) {
                    let raw = cursor::remove_at(&self.display, self.cursor);
                    self.commit_edit(raw, self.cursor);
                }
                Handled::Yes
            }
            KeyCode::Enter => {
                self.blur();
                Handled::Yes
            }
            KeyCode::Char(c) => {
                let raw = cursor::insert_at(&self.display, self.cursor, c);
                self.commit_edit(raw, self.cursor + 1);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    /// End editing: renormalize the display (collapsing any
    /// trailing-separator state). Display only, no callback: the canonical
    /// value cannot change on blur.
    pub fn blur(&mut self) {
        if self.display.is_empty() {
            self.state = FieldState::Blurred;
            return;
        }
        // Regenerate from the canonical value: the trailing-separator rule
        // only protects mid-edit text, so "12." settles to "12" here.
        let res = format::format(self.display.as_str(), &self.config, false);
        let settled = format::format(res.raw.as_str(), &self.config, true);
        self.display = settled.display;
        self.cursor = cursor::clamp(&self.display, self.cursor);
        self.pending_cursor = None;
        self.state = FieldState::Blurred;
    }

    /// Apply the deferred cursor fix. Call once after each render commit,
    /// before polling the next input event: the field must finish
    /// re-rendering before cursor placement takes effect.
    pub fn after_render(&mut self) {
        if let Some(target) = self.pending_cursor.take() {
            self.cursor = cursor::clamp(&self.display, target);
        }
    }

    /// One edit pass: format the raw edited text, commit the display, fire
    /// the callback, queue the cursor reposition.
    fn commit_edit(&mut self, raw: String, cursor_in_raw: usize) {
        let res = format::format(raw.as_str(), &self.config, false);
        if res.is_overflow() {
            debug!(input = %raw, "input overflowed, clearing field");
        }
        trace!(input = %raw, display = %res.display, "edit committed");

        let raw_len = cursor::char_len(&raw) as isize;
        let display_len = cursor::char_len(&res.display) as isize;
        // Keep the cursor adjacent to the edit after regrouping shifts text.
        let target = (cursor_in_raw as isize + display_len - raw_len).clamp(0, display_len) as usize;

        self.display = res.display.clone();
        self.value = Some(res.raw.clone());
        self.state = FieldState::Editing;
        self.pending_cursor = Some(target);
        self.emit(&res);
    }

    /// Arrow-key step: derive the numeric from the current value, add the
    /// signed step, clamp, reformat and commit.
    fn step(&mut self, direction: f64) {
        // The mirror is canonical ('.' decimal point), so it goes through
        // the initial-load path; as user text a canonical '.' would read as
        // grouping under European separators.
        let current = self
            .value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(|v| format::format(v, &self.config, true).numeric)
            .filter(|n| n.is_finite())
            .unwrap_or(0.0);

        let mut next = current + direction * self.config.step;
        if let Some(min) = self.config.min {
            next = next.max(min);
        }
        if let Some(max) = self.config.max {
            next = next.min(max);
        }
        if !self.config.allow_negative {
            next = next.max(0.0);
        }

        let res = format::format(next, &self.config, false);
        trace!(from = current, to = next, "arrow step");

        self.display = res.display.clone();
        self.value = Some(res.raw.clone());
        self.pending_cursor = Some(cursor::char_len(&self.display));
        self.emit(&res);
    }

    fn emit(&mut self, res: &FormatResult) {
        if let Some(callback) = &mut self.on_change {
            callback(res);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn press(field: &mut NumberField, code: KeyCode) -> Handled {
        let handled = field.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        field.after_render();
        handled
    }

    fn type_str(field: &mut NumberField, text: &str) {
        for c in text.chars() {
            press(field, KeyCode::Char(c));
        }
    }

    /// Continental style: '.' grouping, ',' decimal point.
    fn european_config() -> FormatConfig {
        FormatConfig {
            thousand_separator: '.',
            decimal_separator: ',',
            ..FormatConfig::default()
        }
    }

    #[test]
    fn typing_groups_and_keeps_cursor_at_end() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "1234");
        assert_eq!(field.display(), "1,234");
        assert_eq!(field.cursor(), 5);
        assert_eq!(field.state(), FieldState::Editing);
    }

    #[test]
    fn cursor_stays_adjacent_to_mid_edit() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "1234");
        assert_eq!(field.display(), "1,234");

        // Move between '2' and '3', type '9': "1,234" -> "12,934".
        press(&mut field, KeyCode::Left);
        press(&mut field, KeyCode::Left);
        assert_eq!(field.cursor(), 3);
        press(&mut field, KeyCode::Char('9'));

        assert_eq!(field.display(), "12,934");
        // Cursor sits right after the typed '9', not at an edge.
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn backspace_reformats_and_repositions() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "1234");
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.display(), "123");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn change_callback_receives_the_triple() {
        let seen: Rc<RefCell<Vec<FormatResult>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut field =
            NumberField::new(FormatConfig::default()).on_change(move |res: &FormatResult| {
                sink.borrow_mut().push(res.clone());
            });

        type_str(&mut field, "1234");
        let last = seen.borrow().last().cloned().unwrap();
        assert_eq!(last.raw, "1234");
        assert_eq!(last.numeric, 1234.0);
        assert_eq!(last.display, "1,234");
    }

    #[test]
    fn set_value_does_not_fire_callback() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut field = NumberField::new(FormatConfig::default()).on_change(move |_| {
            *sink.borrow_mut() += 1;
        });

        field.set_value("1233.456");
        assert_eq!(*count.borrow(), 0);
        assert_eq!(field.display(), "1,233.45");
        assert_eq!(field.state(), FieldState::Idle);
    }

    #[test]
    fn set_config_reformats_under_new_separators() {
        let mut field = NumberField::new(FormatConfig::default()).with_value("1234.5");
        assert_eq!(field.display(), "1,234.5");

        field.set_config(european_config());
        assert_eq!(field.display(), "1.234,5");
        assert_eq!(field.value(), Some("1234.5"));
    }

    #[test]
    fn arrow_step_clamps_to_min() {
        let config = FormatConfig {
            min: Some(0.0),
            max: Some(10.0),
            ..FormatConfig::default()
        };
        let mut field = NumberField::new(config).with_value(0.0);

        press(&mut field, KeyCode::Down);
        assert_eq!(field.display(), "0");
        assert_eq!(field.value(), Some("0"));

        press(&mut field, KeyCode::Up);
        assert_eq!(field.display(), "1");
    }

    #[test]
    fn arrow_step_clamps_to_max() {
        let config = FormatConfig {
            min: Some(0.0),
            max: Some(10.0),
            ..FormatConfig::default()
        };
        let mut field = NumberField::new(config).with_value(10.0);
        press(&mut field, KeyCode::Up);
        assert_eq!(field.display(), "10");
    }

    #[test]
    fn arrow_step_floors_at_zero_without_negatives() {
        let mut field = NumberField::new(FormatConfig::default()).with_value(0.0);
        press(&mut field, KeyCode::Down);
        assert_eq!(field.display(), "0");
    }

    #[test]
    fn arrow_step_goes_negative_when_allowed() {
        let config = FormatConfig {
            allow_negative: true,
            ..FormatConfig::default()
        };
        let mut field = NumberField::new(config).with_value(0.0);
        press(&mut field, KeyCode::Down);
        assert_eq!(field.display(), "-1");
    }

    #[test]
    fn arrow_step_preserves_fraction_under_european_separators() {
        // The canonical mirror uses '.' as the decimal point; stepping must
        // not reread it as a thousand separator.
        let mut field = NumberField::new(european_config()).with_value("1234.5");
        assert_eq!(field.display(), "1.234,5");

        press(&mut field, KeyCode::Up);
        assert_eq!(field.value(), Some("1235.5"));
        assert_eq!(field.display(), "1.235,5");

        press(&mut field, KeyCode::Down);
        assert_eq!(field.value(), Some("1234.5"));
    }

    #[test]
    fn arrow_step_from_empty_starts_at_zero() {
        let mut field = NumberField::new(FormatConfig::default());
        press(&mut field, KeyCode::Up);
        assert_eq!(field.display(), "1");
    }

    #[test]
    fn blur_collapses_trailing_separator() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "12.");
        assert_eq!(field.display(), "12.");

        field.blur();
        assert_eq!(field.display(), "12");
        assert_eq!(field.state(), FieldState::Blurred);
    }

    #[test]
    fn blur_does_not_fire_callback() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut field = NumberField::new(FormatConfig::default()).on_change(move |_| {
            *sink.borrow_mut() += 1;
        });
        type_str(&mut field, "12.");
        let before = *count.borrow();
        field.blur();
        assert_eq!(*count.borrow(), before);
    }

    #[test]
    fn overflow_clears_the_field() {
        let seen: Rc<RefCell<Vec<FormatResult>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut field =
            NumberField::new(FormatConfig::default()).on_change(move |res: &FormatResult| {
                sink.borrow_mut().push(res.clone());
            });

        type_str(&mut field, &"9".repeat(22));
        assert_eq!(field.display(), "");
        assert_eq!(field.cursor(), 0);
        assert!(seen.borrow().last().unwrap().is_overflow());

        // Valid input recovers immediately.
        type_str(&mut field, "5");
        assert_eq!(field.display(), "5");
    }

    #[test]
    fn garbage_chars_are_cleaned_out() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "1a2b3");
        assert_eq!(field.display(), "123");
    }

    #[test]
    fn abbreviation_expands_while_typing() {
        let mut field = NumberField::new(FormatConfig::default());
        type_str(&mut field, "2.5k");
        assert_eq!(field.display(), "2,500");
        assert_eq!(field.value(), Some("2500"));
    }

    #[test]
    fn unhandled_keys_bubble_up() {
        let mut field = NumberField::new(FormatConfig::default());
        assert_eq!(press(&mut field, KeyCode::Tab), Handled::No);
        assert_eq!(press(&mut field, KeyCode::Esc), Handled::No);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(field.handle_key(ctrl_c), Handled::No);
    }
}
