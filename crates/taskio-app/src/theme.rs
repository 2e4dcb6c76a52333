use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Terminal color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Palette tuned for light terminal backgrounds.
    #[default]
    Light,
    /// Palette tuned for dark terminal backgrounds.
    Dark,
}

impl Theme {
    /// The opposite scheme, used by the toggle command.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Name used in configuration files and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a theme name cannot be recognized.
#[derive(Debug, Error)]
#[error("unknown theme (expected light or dark): {0}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_schemes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn parse_is_case_insensitive() {
        let dark: Theme = " Dark ".parse().unwrap_or_else(|err| panic!("must parse: {err}"));
        assert_eq!(dark, Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn config_names_are_lowercase() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        let json = serde_json::to_string(&Theme::Light).unwrap_or_else(|err| panic!("serialize: {err}"));
        assert_eq!(json, "\"light\"");
    }
}
