//! Theme controller: startup synchronization and toggle change handling.
//!
//! DESIGN
//! ======
//! The controller owns its capabilities and the last applied theme. Startup
//! reads the stored preference, sets the root attribute and mirrors it onto
//! the toggle (if any). A change derives the theme from the toggle's checked
//! state, sets the root attribute and persists the new value.
//!
//! Each operation stops at the first failing capability. The active theme
//! and the toggle only move once the root attribute has been set, so the
//! two never disagree.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::ports::{PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

/// Keeps root attribute, toggle state and stored preference in agreement.
pub struct ThemeController<S, R, T> {
    config: ThemeConfig,
    store: S,
    root: R,
    toggle: Option<T>,
    active: Theme,
}

impl<S, R, T> ThemeController<S, R, T>
where
    S: PreferenceStore,
    R: ThemeRoot,
    T: ToggleControl,
{
    /// Build a controller. `toggle` is `None` when the page has no control.
    #[must_use]
    pub fn new(config: ThemeConfig, store: S, root: R, toggle: Option<T>) -> Self {
        Self { config, store, root, toggle, active: Theme::default() }
    }

    /// Read the stored preference, apply it and mirror it onto the toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the root attribute
    /// cannot be set.
    pub fn startup(&mut self) -> Result<Theme, ThemeError> {
        let stored = self.store.load(&self.config.storage_key)?;
        let theme = Theme::from_stored(stored.as_deref());
        self.apply(theme)?;
        self.mirror(theme);
        Ok(theme)
    }

    /// React to a change event on the toggle using its current checked state.
    ///
    /// Returns `Ok(None)` when there is no toggle to read. If the root
    /// attribute cannot be set the toggle is reverted to the active theme.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_checked`].
    pub fn handle_change(&mut self) -> Result<Option<Theme>, ThemeError> {
        let Some(checked) = self.toggle.as_ref().map(ToggleControl::is_checked) else {
            return Ok(None);
        };
        let theme = Theme::from_checked(checked);
        if let Err(err) = self.apply(theme) {
            // Keep the control on the applied theme.
            self.mirror(self.active);
            return Err(err);
        }
        self.persist(theme)?;
        Ok(Some(theme))
    }

    /// Apply and persist the theme encoded by `checked`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root attribute cannot be set or the store
    /// rejects the write.
    pub fn apply_checked(&mut self, checked: bool) -> Result<Theme, ThemeError> {
        let theme = Theme::from_checked(checked);
        self.apply(theme)?;
        self.persist(theme)?;
        Ok(theme)
    }

    /// Switch to `theme` programmatically: apply, mirror onto the toggle and
    /// persist.
    ///
    /// # Errors
    ///
    /// Same as [`Self::apply_checked`].
    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme, ThemeError> {
        self.apply(theme)?;
        self.mirror(theme);
        self.persist(theme)?;
        Ok(theme)
    }

    /// Last theme written to the root attribute.
    #[must_use]
    pub fn active(&self) -> Theme {
        self.active
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&T> {
        self.toggle.as_ref()
    }

    /// Mutable access to the toggle, for hosts that flip it directly.
    pub fn toggle_mut(&mut self) -> Option<&mut T> {
        self.toggle.as_mut()
    }

    fn apply(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.root.set_attribute(&self.config.attribute, theme.as_str())?;
        self.active = theme;
        Ok(())
    }

    fn mirror(&mut self, theme: Theme) {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.set_checked(theme.is_checked());
        }
    }

    fn persist(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.store.save(&self.config.storage_key, theme.as_str())
    }
}
