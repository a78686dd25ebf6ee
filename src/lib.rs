//! # fhd-theme
//!
//! Light/dark theme toggle for the FHD reporting UI, compiled to WebAssembly.
//!
//! On page load the stored preference is read from `localStorage`, applied as a
//! `data-theme` attribute on `<html>`, and mirrored onto the `#themeToggle`
//! checkbox. Changing the checkbox re-applies the attribute and writes the new
//! preference back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two-valued [`theme::Theme`] and its string/checkbox encodings |
//! | [`controller`] | Testable [`controller::ThemeController`] driving startup and change handling |
//! | [`ports`] | Storage, root-attribute and toggle capabilities the controller is injected with |
//! | [`memory`] | In-memory capabilities for tests |
//! | [`config`] | Storage key, attribute name and toggle id |
//! | [`error`] | [`error::ThemeError`] |
//! | [`component`] | Leptos `ThemeToggle` checkbox |
//! | `browser` | `web-sys` capabilities and event wiring (`hydrate` only) |

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod ports;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;
