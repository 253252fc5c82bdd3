//! Countdown timer component for Bubble Tea applications.
//!
//! The user types a duration in seconds, sets it with `enter`, and then
//! starts, pauses or resets a `mm:ss` display that ticks down once per
//! second. Setting a duration that is not a positive number opens a blocking
//! alert that has to be dismissed before anything else can be done.
//!
//! The component is split in layers:
//!
//! - [`Countdown`]: the pure state machine (duration, remaining time, phase).
//! - [`ticker`]: schedules [`TickMsg`]s for the live [`TickHandle`].
//! - [`Model`]: the bubbletea-rs model with the input field, controls, alert
//!   and help line.
//!
//! # Basic Usage
//!
//! ```rust
//! use countdown_widgets::countdown::new;
//!
//! let mut countdown = new();
//! countdown.set_duration(Some(5)).unwrap();
//! let first_tick = countdown.start();
//! assert!(first_tick.is_some());
//! assert!(countdown.armed());
//!
//! countdown.pause();
//! assert!(countdown.paused());
//! assert_eq!(countdown.remaining(), 5);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//! use countdown_widgets::countdown::{new, Model, TimeoutMsg};
//!
//! struct App {
//!     countdown: Model,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { countdown: new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<TimeoutMsg>() {
//!             if done.id == self.countdown.id() {
//!                 // Time is up.
//!             }
//!         }
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```

pub mod keymap;
pub mod model;
pub mod state;
pub mod ticker;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, new_with_interval, Model};
pub use state::{Controls, Countdown, Phase, TickHandle, TickOutcome};
pub use ticker::{TickMsg, TimeoutMsg};
pub use view::{format_time, Styles};
