use std::path::Path;

use lazy_static::lazy_static;

use serde::{Deserialize, Serialize};

use ratatui::style::{Color, Style, Stylize};

lazy_static! {
    static ref IS_DARK: bool = match terminal_light::luma() {
        Ok(luma) if luma <= 0.6 => true,
        _ => false,
    };
}

/// Styles shared by all widgets. Defaults are chosen based on the
/// terminals' background color; custom themes can be loaded from a
/// JSON file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub border_style: Style,
    pub shortcuts_keys_style: Style,
    pub shortcuts_action_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        if *IS_DARK {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            border_style: Style::default().fg(Color::Rgb(170, 170, 170)),
            shortcuts_keys_style: style::magenta(),
            shortcuts_action_style: style::gray(),
        }
    }

    pub fn dark() -> Self {
        Self {
            border_style: Style::default().fg(Color::Indexed(236)),
            shortcuts_keys_style: style::magenta().dim(),
            shortcuts_action_style: style::gray().dim(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }
}

pub mod style {
    use ratatui::style::{Color, Style};

    pub fn cyan() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn magenta() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn gray() -> Style {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_should_be_parsed_from_json() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Theme::light())?;
        assert_eq!(Theme::from_json(&json)?, Theme::light());

        let json = serde_json::to_string(&Theme::dark())?;
        assert_eq!(Theme::from_json(&json)?, Theme::dark());

        Ok(())
    }

    #[test]
    fn partial_theme_should_fall_back_to_defaults() -> anyhow::Result<()> {
        let theme = Theme::from_json("{}")?;
        assert_eq!(theme, Theme::default());

        Ok(())
    }

    #[test]
    fn malformed_theme_should_be_rejected() {
        assert!(Theme::from_json(r#"{ "border_style": 1 }"#).is_err());
    }
}
