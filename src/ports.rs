//! Capabilities the theme controller is injected with.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage and the live DOM are global mutable state. The controller
//! only sees them through these traits, so the same logic runs against
//! `web-sys` handles in the page and in-memory fakes in tests.

use crate::error::ThemeError;

// =============================================================================
// STORAGE
// =============================================================================

/// Durable key-value store holding the theme preference.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the backing store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

// =============================================================================
// VISUAL ROOT
// =============================================================================

/// Top-level element that theme-scoped styling hangs off.
pub trait ThemeRoot {
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the attribute cannot be set.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
}

// =============================================================================
// TOGGLE CONTROL
// =============================================================================

/// Checkbox-style control; checked means dark.
pub trait ToggleControl {
    fn is_checked(&self) -> bool;
    fn set_checked(&mut self, checked: bool);
}
