//! Type-safe key bindings for countdown-widgets components.
//!
//! A [`Binding`] groups one or more key presses with the help text shown for
//! them. Bindings can be disabled, in which case they never match and are left
//! out of help views. Components expose their bindings through the [`KeyMap`]
//! trait so a [`crate::help::Model`] can render them.
//!
//! # Examples
//!
//! ```rust
//! use countdown_widgets::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let start = new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('s'), modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &start));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while the key was pressed.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Parses a key description such as `"enter"`, `"ctrl+c"` or `"s"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for printable characters because terminals encode it
    /// in the character itself.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                (msg.modifiers & relevant) == (self.modifiers & relevant)
            }
            _ => msg.modifiers == self.modifiers,
        }
    }
}

/// Help text for a binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"s"` or `"ctrl+c"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// A configuration step applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates an enabled binding for the given key presses with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Builder form of [`Binding::set_help`].
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.set_help(key, desc);
        self
    }

    /// Sets the help text.
    pub fn set_help(&mut self, key: impl Into<String>, desc: impl Into<String>) {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key presses.
///
/// ```rust
/// use countdown_widgets::key::{new_binding, with_keys, KeyPress};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let quit = new_binding(vec![with_keys(vec![
///     KeyPress::from(KeyCode::Esc),
///     KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
/// ])]);
/// assert_eq!(quit.keys().len(), 2);
/// ```
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the keys of a binding from key names; unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    with_keys(parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let key = key.to_string();
    let desc = desc.to_string();
    Box::new(move |b: &mut Binding| b.set_help(key, desc))
}

/// Starts the binding out disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether a key message triggers the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether a key message triggers any of the bindings.
///
/// ```rust
/// use bubbletea_rs::KeyMsg;
/// use countdown_widgets::key::{matches, new_binding, with_keys_str};
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let start = new_binding(vec![with_keys_str(&["s"])]);
/// let pause = new_binding(vec![with_keys_str(&["p"])]);
///
/// let msg = KeyMsg { key: KeyCode::Char('p'), modifiers: KeyModifiers::NONE };
/// assert!(matches(&msg, &[&start, &pause]));
/// ```
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Exposes a component's bindings to help views.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("enter"), Some(KeyPress::from(KeyCode::Enter)));
        assert_eq!(
            KeyPress::parse("space"),
            Some(KeyPress::from(KeyCode::Char(' ')))
        );
        assert_eq!(
            KeyPress::parse("ctrl+c"),
            Some(KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)))
        );
        assert_eq!(KeyPress::parse("nonsense"), None);
    }

    #[test]
    fn test_char_binding_ignores_shift() {
        let help = new_binding(vec![with_keys_str(&["?"])]);
        assert!(help.matches(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        assert!(!help.matches(&key(KeyCode::Char('?'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_ctrl_binding_requires_ctrl() {
        let quit = new_binding(vec![with_keys_str(&["ctrl+c"])]);
        assert!(quit.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut start = new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]);
        let msg = key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(matches_binding(&msg, &start));

        start.set_enabled(false);
        assert!(!start.enabled());
        assert!(!matches_binding(&msg, &start));

        let disabled = new_binding(vec![with_keys_str(&["p"]), with_disabled()]);
        assert!(!disabled.enabled());
    }

    #[test]
    fn test_binding_without_keys_is_not_enabled() {
        let empty = new_binding(vec![with_help("x", "nothing")]);
        assert!(!empty.enabled());
        assert_eq!(empty.help().desc, "nothing");
    }

    #[test]
    fn test_with_keys_sets_key_presses() {
        let quit = new_binding(vec![
            with_keys(vec![
                KeyPress::from(KeyCode::Esc),
                KeyPress::from((KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ]),
            with_help("esc", "quit"),
        ]);
        assert_eq!(quit.keys().len(), 2);
        assert!(quit.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(quit.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quit.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Enter]);
        let b = Binding::new(vec![KeyCode::Esc]);
        assert!(matches(&key(KeyCode::Esc, KeyModifiers::NONE), &[&a, &b]));
        assert!(!matches(&key(KeyCode::Tab, KeyModifiers::NONE), &[&a, &b]));
    }
}
