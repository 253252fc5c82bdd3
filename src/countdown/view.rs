//! Rendering helpers for the countdown.

use super::state::Controls;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Formats seconds as `mm:ss`.
///
/// Minutes are not wrapped into hours, so values of an hour or more simply
/// show more than two minute digits.
///
/// ```rust
/// use countdown_widgets::countdown::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(3), "00:03");
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(6000), "100:00");
/// ```
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Styles for the parts of the countdown view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Heading above the input.
    pub title: Style,
    /// The `mm:ss` display.
    pub display: Style,
    /// A control that can be used.
    pub button: Style,
    /// A control that cannot be used right now.
    pub button_disabled: Style,
    /// A control while keyboard focus is on the controls row.
    pub button_focused: Style,
    /// The blocking alert box.
    pub alert: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true).foreground(Color::from("212")),
            display: Style::new()
                .bold(true)
                .foreground(Color::from("white"))
                .padding(1, 2, 1, 2),
            button: Style::new().foreground(Color::from("#04b575")),
            button_disabled: Style::new().faint(true),
            button_focused: Style::new().bold(true).foreground(Color::from("#04b575")),
            alert: Style::new()
                .border_style(lipgloss::normal_border())
                .border_foreground(Color::from("red"))
                .foreground(Color::from("red"))
                .padding(0, 1, 0, 1),
        }
    }
}

/// Renders a control label like `[ Start ]`.
pub fn render_button(label: &str, enabled: bool, focused: bool, styles: &Styles) -> String {
    let text = format!("[ {} ]", label);
    let style = if !enabled {
        &styles.button_disabled
    } else if focused {
        &styles.button_focused
    } else {
        &styles.button
    };
    style.clone().inline(true).render(&text)
}

/// Renders the Start / Pause / Reset row.
pub fn render_controls(controls: Controls, focused: bool, styles: &Styles) -> String {
    [
        render_button("Start", controls.start, focused, styles),
        render_button("Pause", controls.pause, focused, styles),
        render_button("Reset", controls.reset, focused, styles),
    ]
    .join(" ")
}
