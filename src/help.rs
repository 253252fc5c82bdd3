//! Help component for displaying key bindings.
//!
//! Renders the bindings of any [`KeyMap`] either as a single line
//! (`s start • r reset`) or as columns. Disabled bindings are skipped, so a
//! component that disables the bindings of unavailable actions gets a help
//! line that only lists what the user can do right now.
//!
//! ```rust
//! use countdown_widgets::help::Model;
//! use countdown_widgets::key::{new_binding, with_help, with_keys_str, Binding, KeyMap};
//!
//! struct Keys {
//!     start: Binding,
//! }
//!
//! impl KeyMap for Keys {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.start]
//!     }
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.start]]
//!     }
//! }
//!
//! let keys = Keys {
//!     start: new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]),
//! };
//! let help = Model::new();
//! assert!(!help.view(&keys).is_empty());
//! ```

use crate::key::{self, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Styles applied to the parts of the help view.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style of the ellipsis shown when the help is truncated.
    pub ellipsis: Style,
    /// Key labels in the short view.
    pub short_key: Style,
    /// Descriptions in the short view.
    pub short_desc: Style,
    /// Separator between items in the short view.
    pub short_separator: Style,
    /// Key labels in the full view.
    pub full_key: Style,
    /// Descriptions in the full view.
    pub full_desc: Style,
    /// Separator between columns in the full view.
    pub full_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key_style = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc_style = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let sep_style = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });

        Self {
            ellipsis: sep_style.clone(),
            short_key: key_style.clone(),
            short_desc: desc_style.clone(),
            short_separator: sep_style.clone(),
            full_key: key_style,
            full_desc: desc_style,
            full_separator: sep_style,
        }
    }
}

/// The help view model.
#[derive(Debug, Clone)]
pub struct Model {
    /// Render the full multi-column view instead of the short line.
    pub show_all: bool,
    /// Maximum width in cells; `0` means unlimited.
    pub width: usize,
    /// Separator between short view items.
    pub short_separator: String,
    /// Separator between full view columns.
    pub full_separator: String,
    /// Marker appended when items are cut off.
    pub ellipsis: String,
    /// Styles for each part of the view.
    pub styles: Styles,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            show_all: false,
            width: 0,
            short_separator: " • ".to_string(),
            full_separator: "    ".to_string(),
            ellipsis: "…".to_string(),
            styles: Styles::default(),
        }
    }
}

impl Model {
    /// Creates a help model with default styles and no width limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum width. Items that do not fit are replaced by the
    /// ellipsis.
    ///
    /// ```rust
    /// use countdown_widgets::help::Model;
    /// use countdown_widgets::key::{new_binding, with_help, with_keys_str};
    ///
    /// let start = new_binding(vec![with_keys_str(&["s"]), with_help("s", "start")]);
    /// let reset = new_binding(vec![with_keys_str(&["r"]), with_help("r", "reset")]);
    ///
    /// let help = Model::new().with_width(10);
    /// let line = help.short_help_view(vec![&start, &reset]);
    /// assert!(line.contains('…'));
    /// ```
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the short or full view depending on [`Model::show_all`].
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        if self.show_all {
            self.full_help_view(keymap.full_help())
        } else {
            self.short_help_view(keymap.short_help())
        }
    }

    /// Renders bindings on one line, separated by [`Model::short_separator`].
    pub fn short_help_view(&self, bindings: Vec<&key::Binding>) -> String {
        if bindings.is_empty() {
            return String::new();
        }

        let mut builder = String::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .short_separator
            .clone()
            .inline(true)
            .render(&self.short_separator);

        for kb in bindings.iter() {
            if !kb.enabled() {
                continue;
            }

            let sep = if total_width > 0 { separator.as_str() } else { "" };

            let help = kb.help();
            let key_part = self.styles.short_key.clone().inline(true).render(&help.key);
            let desc_part = self
                .styles
                .short_desc
                .clone()
                .inline(true)
                .render(&help.desc);
            let item_str = format!("{}{} {}", sep, key_part, desc_part);

            let item_width = lipgloss::width_visible(&item_str);

            if let Some(tail) = self.should_add_item(total_width, item_width) {
                builder.push_str(&tail);
                break;
            }

            total_width += item_width;
            builder.push_str(&item_str);
        }
        builder
    }

    /// Renders groups of bindings as side-by-side columns.
    pub fn full_help_view(&self, groups: Vec<Vec<&key::Binding>>) -> String {
        if groups.is_empty() {
            return String::new();
        }

        let mut columns = Vec::new();
        let mut total_width = 0;
        let separator = self
            .styles
            .full_separator
            .clone()
            .inline(true)
            .render(&self.full_separator);

        for group in groups.iter() {
            if !should_render_column(group) {
                continue;
            }

            let rows: Vec<String> = group
                .iter()
                .filter(|b| b.enabled())
                .map(|b| {
                    let help = b.help();
                    let key_part = self.styles.full_key.clone().inline(true).render(&help.key);
                    let desc_part = self
                        .styles
                        .full_desc
                        .clone()
                        .inline(true)
                        .render(&help.desc);
                    format!("{} {}", key_part, desc_part)
                })
                .collect();

            let col_str = rows.join("\n");
            let col_width = lipgloss::width_visible(&col_str);

            if let Some(tail) = self.should_add_item(total_width, col_width) {
                if !tail.is_empty() {
                    columns.push(tail);
                }
                break;
            }

            total_width += col_width;
            columns.push(col_str);
        }

        let mut result_parts = Vec::new();
        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                result_parts.push(separator.as_str());
            }
            result_parts.push(col.as_str());
        }

        lipgloss::join_horizontal(lipgloss::TOP, &result_parts)
    }

    // Some(tail) means the item does not fit; tail is the ellipsis, or empty
    // when not even that fits.
    fn should_add_item(&self, total_width: usize, item_width: usize) -> Option<String> {
        if self.width > 0 && total_width + item_width > self.width {
            let tail = format!(
                " {}",
                self.styles
                    .ellipsis
                    .clone()
                    .inline(true)
                    .render(&self.ellipsis)
            );
            if total_width + lipgloss::width_visible(&tail) < self.width {
                return Some(tail);
            }
            return Some(String::new());
        }
        None
    }
}

/// A column is rendered only if at least one of its bindings is enabled.
pub fn should_render_column(bindings: &[&key::Binding]) -> bool {
    bindings.iter().any(|b| b.enabled())
}
