//! The countdown component model.

use super::keymap::{default_key_map, KeyMap};
use super::state::{Controls, Countdown, TickHandle, TickOutcome};
use super::ticker::{self, TickMsg};
use super::view::{format_time, render_controls, Styles};
use crate::durationinput;
use crate::error::InvalidDurationError;
use crate::help;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Controls,
}

/// A countdown timer with a duration field, controls and a `mm:ss` display.
///
/// The model routes key presses to the input field or the controls, keeps the
/// alert shown when an invalid duration is set, and turns the tick handles
/// handed out by [`Countdown`] into scheduled tick commands.
#[derive(Debug, Clone)]
pub struct Model {
    /// Time between ticks. One second unless built with
    /// [`new_with_interval`].
    pub interval: Duration,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Help line below the controls.
    pub help: help::Model,
    /// View styles.
    pub styles: Styles,
    /// Title shown above the input.
    pub title: String,

    state: Countdown,
    input: durationinput::Model,
    focus: Focus,
    alert: Option<String>,
}

/// Creates a countdown ticking once per second, with the input focused.
pub fn new() -> Model {
    new_with_interval(Duration::from_secs(1))
}

/// Creates a countdown with a custom tick interval.
pub fn new_with_interval(interval: Duration) -> Model {
    let mut input = durationinput::new();
    input.focus();
    let mut m = Model {
        interval,
        key_map: default_key_map(),
        help: help::Model::new(),
        styles: Styles::default(),
        title: "Countdown Timer".to_string(),
        state: Countdown::new(ticker::next_id()),
        input,
        focus: Focus::Input,
        alert: None,
    };
    m.sync_key_map();
    m
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Id that tick and timeout messages for this countdown carry.
    pub fn id(&self) -> i64 {
        self.state.id()
    }

    /// The underlying state machine.
    pub fn state(&self) -> &Countdown {
        &self.state
    }

    /// Seconds left.
    pub fn remaining(&self) -> u64 {
        self.state.remaining()
    }

    /// The last duration successfully set.
    pub fn duration(&self) -> Option<u64> {
        self.state.duration()
    }

    /// True while counting down.
    pub fn armed(&self) -> bool {
        self.state.armed()
    }

    /// True while suspended mid-run.
    pub fn paused(&self) -> bool {
        self.state.paused()
    }

    /// Which controls are currently usable.
    pub fn controls(&self) -> Controls {
        self.state.controls()
    }

    /// The alert message, if one is being shown.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// The duration input field.
    pub fn input(&self) -> &durationinput::Model {
        &self.input
    }

    /// Mutable access to the duration input field.
    pub fn input_mut(&mut self) -> &mut durationinput::Model {
        &mut self.input
    }

    /// Whether key presses go to the input field.
    pub fn input_focused(&self) -> bool {
        self.focus == Focus::Input
    }

    /// Moves keyboard focus to the input field.
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.input.focus();
        self.sync_key_map();
    }

    /// Moves keyboard focus to the controls.
    pub fn focus_controls(&mut self) {
        self.focus = Focus::Controls;
        self.input.blur();
        self.sync_key_map();
    }

    /// Sets the duration without touching the alert.
    pub fn set_duration(&mut self, seconds: Option<i64>) -> Result<(), InvalidDurationError> {
        let res = self.state.set_duration(seconds);
        match &res {
            Ok(()) => debug!(id = self.id(), ?seconds, "countdown duration set"),
            Err(e) => warn!(id = self.id(), input = ?e.input, "rejected countdown duration"),
        }
        self.sync_key_map();
        res
    }

    /// The "Set" action: reads the input field and sets it as the duration.
    ///
    /// An invalid value opens the alert and leaves the countdown untouched.
    /// On success focus moves to the controls.
    pub fn submit(&mut self) -> Result<(), InvalidDurationError> {
        let res = self.set_duration(self.input.seconds());
        match &res {
            Ok(()) => self.focus_controls(),
            Err(e) => {
                self.alert = Some(e.to_string());
                self.sync_key_map();
            }
        }
        res
    }

    /// Closes the alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.sync_key_map();
    }

    /// Starts or resumes. Returns the first tick command when the countdown
    /// was armed.
    pub fn start(&mut self) -> Option<Cmd> {
        let cmd = self.state.start().map(|handle| self.schedule(handle));
        if cmd.is_some() {
            debug!(id = self.id(), remaining = self.remaining(), "countdown started");
        }
        self.sync_key_map();
        cmd
    }

    /// Pauses a running countdown.
    pub fn pause(&mut self) {
        if self.state.pause() {
            debug!(id = self.id(), remaining = self.remaining(), "countdown paused");
        }
        self.sync_key_map();
    }

    /// Stops and rewinds to the last set duration.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!(id = self.id(), remaining = self.remaining(), "countdown reset");
        self.sync_key_map();
    }

    /// Pauses when running, starts otherwise.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.state.armed() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Releases the tick handle. Call before the component goes away.
    pub fn teardown(&mut self) {
        self.state.teardown();
        self.sync_key_map();
    }

    fn schedule(&self, handle: TickHandle) -> Cmd {
        ticker::schedule(handle, self.interval)
    }

    fn sync_key_map(&mut self) {
        let controls = self.state.controls();
        let input_focused = self.input_focused();
        let alerting = self.alert.is_some();
        self.key_map.sync(controls, input_focused, alerting);
    }

    /// Processes tick and key messages.
    ///
    /// Ticks are handled regardless of focus. While the alert is shown the
    /// countdown holds its remaining time, and keys other than dismiss are
    /// ignored.
    ///
    /// ```rust
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use countdown_widgets::countdown::new;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut countdown = new();
    /// for key in [KeyCode::Char('9'), KeyCode::Enter] {
    ///     countdown.update(Box::new(KeyMsg { key, modifiers: KeyModifiers::NONE }) as Msg);
    /// }
    /// assert_eq!(countdown.remaining(), 9);
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            return self.handle_tick(tick_msg);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg, &msg);
        }
        None
    }

    fn handle_tick(&mut self, tick_msg: &TickMsg) -> Option<Cmd> {
        if tick_msg.id != self.id() {
            return None;
        }
        // The alert freezes the countdown: a live tick is re-armed for the
        // same handle without taking time off.
        if self.alert.is_some() {
            let handle = tick_msg.handle();
            return (self.state.handle() == Some(handle)).then(|| self.schedule(handle));
        }
        let cmd = match self.state.tick(tick_msg.handle()) {
            TickOutcome::Stale => None,
            TickOutcome::Continue(handle) => Some(self.schedule(handle)),
            TickOutcome::Finished => {
                info!(id = self.id(), "countdown finished");
                Some(ticker::timeout(self.id()))
            }
        };
        self.sync_key_map();
        cmd
    }

    fn handle_key(&mut self, key_msg: &KeyMsg, msg: &Msg) -> Option<Cmd> {
        if self.alert.is_some() {
            if self.key_map.dismiss.matches(key_msg) {
                self.dismiss_alert();
            }
            return None;
        }

        if self.key_map.focus.matches(key_msg) {
            match self.focus {
                Focus::Input => self.focus_controls(),
                Focus::Controls => self.focus_input(),
            }
            return None;
        }

        if self.key_map.set.matches(key_msg) {
            // The alert carries the error to the user.
            let _ = self.submit();
            return None;
        }

        if self.focus == Focus::Input {
            self.input.update(msg);
            return None;
        }

        if self.key_map.start.matches(key_msg) {
            return self.start();
        }
        if self.key_map.pause.matches(key_msg) {
            self.pause();
        } else if self.key_map.reset.matches(key_msg) {
            self.reset();
        } else if self.key_map.toggle.matches(key_msg) {
            return self.toggle();
        } else if self.key_map.show_full_help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        }
        None
    }

    /// Renders the title, input, display, controls, alert and help.
    pub fn view(&self) -> String {
        let title = self.styles.title.clone().inline(true).render(&self.title);
        let set_button = super::view::render_button(
            "Set",
            self.key_map.set.enabled(),
            self.focus == Focus::Input,
            &self.styles,
        );
        let input_row = format!("{}  {}", self.input.view(), set_button);
        let display = self
            .styles
            .display
            .clone()
            .render(&format_time(self.remaining()));
        let controls = render_controls(
            self.controls(),
            self.focus == Focus::Controls,
            &self.styles,
        );

        let mut sections = vec![title, input_row, display, controls];
        if let Some(alert) = &self.alert {
            sections.push(self.styles.alert.clone().render(alert));
        }
        sections.push(self.help.view(&self.key_map));
        sections.join("\n\n")
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus_input();
        None
    }

    fn blur(&mut self) {
        self.focus_controls();
    }

    fn focused(&self) -> bool {
        self.input_focused()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
