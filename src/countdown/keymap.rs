//! Key bindings for the countdown.

use super::state::Controls;
use crate::key::{self, new_binding, with_help, with_keys_str, Binding};

/// Bindings for every countdown action.
///
/// Bindings are enabled and disabled by the model to mirror which controls
/// are usable, so help views only list keys that do something.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Set the duration from the input field.
    pub set: Binding,
    /// Start or resume.
    pub start: Binding,
    /// Pause.
    pub pause: Binding,
    /// Reset to the last set duration.
    pub reset: Binding,
    /// Start when stopped, pause when running.
    pub toggle: Binding,
    /// Move focus between the input field and the controls.
    pub focus: Binding,
    /// Close the alert.
    pub dismiss: Binding,
    /// Show or hide the full help.
    pub show_full_help: Binding,
}

/// Default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        set: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "set")]),
        start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
        pause: new_binding(vec![with_keys_str(&["p"]), with_help("p", "pause")]),
        reset: new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]),
        toggle: new_binding(vec![
            with_keys_str(&["space"]),
            with_help("space", "start/pause"),
        ]),
        focus: new_binding(vec![with_keys_str(&["tab"]), with_help("tab", "switch focus")]),
        dismiss: new_binding(vec![
            with_keys_str(&["enter", "esc"]),
            with_help("enter/esc", "dismiss"),
        ]),
        show_full_help: new_binding(vec![with_keys_str(&["?"]), with_help("?", "more")]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl KeyMap {
    /// Enables exactly the bindings that apply in the given situation.
    pub(crate) fn sync(&mut self, controls: Controls, input_focused: bool, alerting: bool) {
        let controls_active = !input_focused && !alerting;

        self.set.set_enabled(input_focused && !alerting);
        self.focus.set_enabled(!alerting);
        self.dismiss.set_enabled(alerting);
        self.start.set_enabled(controls_active && controls.start);
        self.pause.set_enabled(controls_active && controls.pause);
        self.reset.set_enabled(controls_active && controls.reset);
        self.toggle
            .set_enabled(controls_active && (controls.start || controls.pause));
        self.show_full_help.set_enabled(controls_active);
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.dismiss,
            &self.set,
            &self.start,
            &self.pause,
            &self.reset,
            &self.focus,
            &self.show_full_help,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.set, &self.focus, &self.dismiss],
            vec![&self.start, &self.pause, &self.toggle, &self.reset],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap as _;

    fn enabled_keys(km: &KeyMap) -> Vec<String> {
        km.short_help()
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| b.help().key.clone())
            .collect()
    }

    #[test]
    fn test_sync_while_input_focused() {
        let mut km = default_key_map();
        let controls = Controls {
            start: true,
            pause: false,
            reset: true,
        };
        km.sync(controls, true, false);
        assert_eq!(enabled_keys(&km), vec!["enter", "tab"]);
    }

    #[test]
    fn test_sync_follows_controls() {
        let mut km = default_key_map();
        let controls = Controls {
            start: false,
            pause: true,
            reset: true,
        };
        km.sync(controls, false, false);
        assert_eq!(enabled_keys(&km), vec!["p", "r", "tab", "?"]);
        assert!(km.toggle.enabled());
    }

    #[test]
    fn test_sync_while_alerting() {
        let mut km = default_key_map();
        let controls = Controls {
            start: true,
            pause: false,
            reset: true,
        };
        km.sync(controls, false, true);
        assert_eq!(enabled_keys(&km), vec!["enter/esc"]);
    }
}
