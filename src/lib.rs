#![warn(missing_docs)]

//! # countdown-widgets
//!
//! A countdown timer component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The component follows the Elm Architecture: state lives in a model, every
//! change goes through `update()` with a message, and `view()` renders the
//! current state to a string. The user enters a duration in seconds, sets it,
//! and starts, pauses or resets a `mm:ss` display that ticks down once per
//! second.
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`countdown::Model`] | The countdown widget: input, display, controls, alert, help |
//! | [`countdown::Countdown`] | The state machine behind it, usable on its own |
//! | [`durationinput::Model`] | Numeric input field that only holds non-negative integers |
//! | [`help::Model`] | Key binding help line |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use countdown_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { countdown: countdown_new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```

pub mod config;
pub mod countdown;
pub mod durationinput;
pub mod error;
pub mod help;
pub mod key;
pub mod logging;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component receives keyboard input; a blurred one ignores it.
///
/// ```rust
/// use countdown_widgets::prelude::*;
///
/// let mut input = durationinput_new();
/// assert!(!input.focused());
///
/// Component::focus(&mut input);
/// assert!(input.focused());
///
/// Component::blur(&mut input);
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state, optionally returning a command
    /// to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state.
    fn focused(&self) -> bool;
}

pub use countdown::{
    format_time, new as countdown_new, new_with_interval as countdown_new_with_interval,
    Countdown as CountdownState, KeyMap as CountdownKeyMap, Model as Countdown,
    TickMsg as CountdownTickMsg, TimeoutMsg as CountdownTimeoutMsg,
};
pub use durationinput::{new as durationinput_new, Model as DurationInput};
pub use error::InvalidDurationError;
pub use help::Model as HelpModel;
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use countdown_widgets::prelude::*;
///
/// let countdown = countdown_new();
/// assert_eq!(format_time(countdown.remaining()), "00:00");
/// ```
pub mod prelude {
    pub use crate::countdown::{
        format_time, new as countdown_new, new_with_interval as countdown_new_with_interval,
        Countdown as CountdownState, KeyMap as CountdownKeyMap, Model as Countdown,
        TickMsg as CountdownTickMsg, TimeoutMsg as CountdownTimeoutMsg,
    };
    pub use crate::durationinput::{new as durationinput_new, Model as DurationInput};
    pub use crate::error::InvalidDurationError;
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys,
        with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::Component;
}
