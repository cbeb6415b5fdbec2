//! Visual styles for the prompt line and suggestion panel.

use anyhow::{Result, bail};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub prompt: Style,
    pub placeholder: Style,
    pub page_title: Style,
    pub section_title: Style,
    pub row_focused: Style,
    pub hint: Style,
}

pub const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    placeholder: Style::new().fg(Color::DarkGray),
    page_title: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    section_title: Style::new().fg(Color::Rgb(148, 163, 184)),
    row_focused: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    hint: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    placeholder: Style::new().fg(Color::Gray),
    page_title: Style::new()
        .fg(Color::Rgb(30, 41, 59))
        .add_modifier(Modifier::BOLD),
    section_title: Style::new().fg(Color::Rgb(71, 85, 105)),
    row_focused: Style::new()
        .bg(Color::Rgb(226, 232, 240))
        .fg(Color::Rgb(180, 83, 9)),
    hint: Style::new().fg(Color::Gray),
};

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

/// Names accepted by [`by_name`], in presentation order.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["slate", "light"]
}

/// Resolve a theme by name; `None` selects the default.
pub fn by_name(name: Option<&str>) -> Result<Theme> {
    match name {
        None | Some("slate") => Ok(SLATE),
        Some("light") => Ok(LIGHT),
        Some(other) => bail!("unknown theme: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_theme_resolves() {
        for name in names() {
            assert!(by_name(Some(name)).is_ok(), "theme '{name}' should resolve");
        }
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(by_name(Some("neon")).is_err());
    }
}
