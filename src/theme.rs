//! Theme preference and its encodings.
//!
//! DESIGN
//! ======
//! Stored values are read leniently: only the exact string `light` selects
//! the light theme, everything else falls back to dark. `FromStr` is strict
//! and reserved for configuration input.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Active visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Resolve a persisted value. Missing or unrecognized values are dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Theme encoded by a toggle's checked state (checked = dark).
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Checked state that encodes this theme.
    #[must_use]
    pub fn is_checked(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}
