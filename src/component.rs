//! Leptos checkbox that renders and drives the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! For pages built with Leptos instead of server-rendered markup. The
//! component owns the checked state as a signal; on hydration it runs
//! controller startup against the live page, and each change routes through
//! the same controller so storage and `<html>` stay in step. Build without
//! the `standalone` feature so no second listener is installed.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::ports::{PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

/// Tooltip describing what clicking the toggle will do.
pub fn toggle_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    }
}

/// Route a checkbox change through `controller`: one root attribute write and
/// one storage write. Returns the theme the checkbox now encodes.
///
/// # Errors
///
/// Returns an error if the root attribute cannot be set or the store rejects
/// the write.
pub fn change_theme<S, R, T>(checked: bool, controller: &mut ThemeController<S, R, T>) -> Result<Theme, ThemeError>
where
    S: PreferenceStore,
    R: ThemeRoot,
    T: ToggleControl,
{
    controller.apply_checked(checked)
}

/// Theme toggle checkbox. Checked means dark.
#[component]
pub fn ThemeToggle(
    /// Names to use instead of the defaults.
    #[prop(optional)]
    config: Option<ThemeConfig>,
    /// Visible label next to the checkbox.
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let toggle_id = config.toggle_id.clone();
    let theme = RwSignal::new(Theme::default());

    #[cfg(feature = "hydrate")]
    {
        let startup_config = config.clone();
        Effect::new(move || {
            match crate::browser::open_detached(startup_config.clone()).and_then(|mut c| c.startup()) {
                Ok(initial) => theme.set(initial),
                Err(err) => log::error!("theme startup failed: {err}"),
            }
        });
    }
    #[cfg(feature = "hydrate")]
    let change_config = config;

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        theme.set(Theme::from_checked(checked));
        #[cfg(feature = "hydrate")]
        {
            let result = crate::browser::open_detached(change_config.clone())
                .and_then(|mut c| change_theme(checked, &mut c));
            if let Err(err) = result {
                log::error!("theme change failed: {err}");
            }
        }
    };

    view! {
        <label class="theme-toggle" title=move || toggle_title(theme.get())>
            <input
                type="checkbox"
                id=toggle_id
                class="theme-toggle__input"
                prop:checked=move || theme.get().is_checked()
                on:change=on_change
            />
            <span class="theme-toggle__label">{label}</span>
        </label>
    }
}
