//! Numeric input field for entering a duration in seconds.
//!
//! A trimmed-down text input that only ever holds a non-negative integer or
//! nothing. After every edit the text is re-parsed, and anything that is not a
//! non-negative integer (a letter, a minus sign, a decimal point) clears the
//! field instead of producing an error.
//!
//! ```rust
//! use countdown_widgets::durationinput::new;
//!
//! let mut input = new();
//! input.set_value("90");
//! assert_eq!(input.seconds(), Some(90));
//!
//! input.set_value("-5");
//! assert_eq!(input.value(), "");
//! assert_eq!(input.seconds(), None);
//! ```

use crate::key::{new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing keys for the input field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Clear the field.
    pub clear: Binding,
}

/// Default editing keys.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        clear: new_binding(vec![with_keys_str(&["ctrl+u"])]),
    }
}

/// The input field model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Text shown before the value.
    pub prompt: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the entered digits.
    pub text_style: Style,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Editing keys.
    pub key_map: KeyMap,
    /// Maximum number of digits; `0` means unlimited.
    pub char_limit: usize,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, unfocused input field.
pub fn new() -> Model {
    Model {
        prompt: "> ".to_string(),
        prompt_style: Style::new(),
        text_style: Style::new(),
        placeholder: "Enter duration in seconds".to_string(),
        placeholder_style: Style::new().foreground(Color::from("240")),
        cursor_style: Style::new().reverse(true),
        key_map: default_key_map(),
        char_limit: 9,
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the value, coercing it to empty unless it is a non-negative
    /// integer within [`Model::char_limit`] digits. The cursor moves to the end.
    ///
    /// ```rust
    /// use countdown_widgets::durationinput::new;
    ///
    /// let mut input = new();
    /// input.set_value("12345678901");
    /// assert_eq!(input.seconds(), None);
    /// ```
    pub fn set_value(&mut self, s: &str) {
        self.set_value_internal(s.chars().collect());
        self.pos = self.value.len();
    }

    fn set_value_internal(&mut self, runes: Vec<char>) {
        let too_long = self.char_limit > 0 && runes.len() > self.char_limit;
        if is_non_negative_integer(&runes) && !too_long {
            self.value = runes;
        } else {
            let rejected: String = runes.iter().collect();
            tracing::debug!(%rejected, "duration input coerced to empty");
            self.value.clear();
        }
        self.pos = self.pos.min(self.value.len());
    }

    /// The raw text of the field.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The entered number of seconds, or `None` when the field is empty.
    pub fn seconds(&self) -> Option<i64> {
        if self.value.is_empty() {
            return None;
        }
        self.value().parse().ok()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the value length.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Whether the field receives key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes focus from the field.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Clears the field.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
    }

    /// Handles editing keys while focused. Other messages are ignored.
    pub fn update(&mut self, msg: &Msg) {
        if !self.focus {
            return;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        let km = &self.key_map;
        if km.delete_character_backward.matches(key_msg) {
            if self.pos > 0 {
                let mut runes = self.value.clone();
                runes.remove(self.pos - 1);
                self.pos -= 1;
                self.set_value_internal(runes);
            }
        } else if km.delete_character_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                let mut runes = self.value.clone();
                runes.remove(self.pos);
                self.set_value_internal(runes);
            }
        } else if km.character_backward.matches(key_msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if km.character_forward.matches(key_msg) {
            self.set_cursor(self.pos + 1);
        } else if km.line_start.matches(key_msg) {
            self.pos = 0;
        } else if km.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if km.clear.matches(key_msg) {
            self.reset();
        } else if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_char(ch);
            }
        }
    }

    fn insert_char(&mut self, ch: char) {
        if self.char_limit > 0 && self.value.len() >= self.char_limit && ch.is_ascii_digit() {
            return;
        }
        let mut runes = self.value.clone();
        runes.insert(self.pos, ch);
        self.pos += 1;
        self.set_value_internal(runes);
    }

    /// Renders the prompt and value, or the placeholder when empty.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.clone().inline(true).render(&self.prompt);

        if self.value.is_empty() {
            let placeholder = if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
                let rest: String = chars.collect();
                format!(
                    "{}{}",
                    self.cursor_style.clone().inline(true).render(&first),
                    self.placeholder_style.clone().inline(true).render(&rest)
                )
            } else {
                self.placeholder_style
                    .clone()
                    .inline(true)
                    .render(&self.placeholder)
            };
            return format!("{}{}", prompt, placeholder);
        }

        let head: String = self.value[..self.pos].iter().collect();
        let mut out = format!(
            "{}{}",
            prompt,
            self.text_style.clone().inline(true).render(&head)
        );

        if self.focus {
            let under: String = self
                .value
                .get(self.pos)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            out.push_str(&self.cursor_style.clone().inline(true).render(&under));
            if self.pos < self.value.len() {
                let tail: String = self.value[self.pos + 1..].iter().collect();
                out.push_str(&self.text_style.clone().inline(true).render(&tail));
            }
        } else {
            let tail: String = self.value[self.pos..].iter().collect();
            out.push_str(&self.text_style.clone().inline(true).render(&tail));
        }
        out
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

fn is_non_negative_integer(runes: &[char]) -> bool {
    runes.iter().all(|c| c.is_ascii_digit())
}
