//! Countdown - a countdown timer for the terminal.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use countdown_widgets::config::Config;
use countdown_widgets::countdown::{self, TimeoutMsg};
use countdown_widgets::key::{new_binding, with_help, with_keys_str, Binding};
use countdown_widgets::logging;
use std::sync::OnceLock;
use tracing::info;

static CONFIG: OnceLock<Config> = OnceLock::new();

struct App {
    countdown: countdown::Model,
    quit: Binding,
    quit_from_controls: Binding,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = CONFIG.get_or_init(Config::parse);
        let mut countdown = countdown::new_with_interval(config.interval());

        if let Some(secs) = config.duration {
            countdown.input_mut().set_value(&secs.to_string());
            // An invalid value is shown in the widget's alert.
            let _ = countdown.submit();
        }

        let app = Self {
            countdown,
            quit: new_binding(vec![with_keys_str(&["ctrl+c"]), with_help("ctrl+c", "quit")]),
            quit_from_controls: new_binding(vec![with_keys_str(&["q"]), with_help("q", "quit")]),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let controls_focused =
                !self.countdown.input_focused() && self.countdown.alert().is_none();
            if self.quit.matches(key_msg)
                || (controls_focused && self.quit_from_controls.matches(key_msg))
            {
                self.countdown.teardown();
                return Some(quit());
            }
        }

        if let Some(done) = msg.downcast_ref::<TimeoutMsg>() {
            if done.id == self.countdown.id() {
                info!("time is up");
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        format!(
            "{}\n\n{}\n",
            self.countdown.view(),
            self.countdown
                .help
                .short_help_view(vec![&self.quit_from_controls, &self.quit])
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CONFIG.get_or_init(Config::parse);
    logging::init(config.log_file.as_deref(), config.log_level())?;

    info!(
        duration = ?config.duration,
        interval_ms = config.interval_ms,
        "starting countdown"
    );

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    info!("countdown exited");
    Ok(())
}
