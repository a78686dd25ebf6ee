//! Names the controller reads and writes.
//!
//! The defaults match the markup served by the reporting UI: a
//! `<input id="themeToggle">` checkbox and the `fhd-theme` storage key.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "fhd-theme";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_TOGGLE_ID: &str = "themeToggle";

/// Storage key, root attribute and toggle element id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any field is empty.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty names.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::InvalidConfig("storage_key"));
        }
        if self.attribute.trim().is_empty() {
            return Err(ThemeError::InvalidConfig("attribute"));
        }
        if self.toggle_id.trim().is_empty() {
            return Err(ThemeError::InvalidConfig("toggle_id"));
        }
        Ok(())
    }
}
