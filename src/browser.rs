//! Browser bindings: `web-sys` capabilities and page event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`install`] waits for `DOMContentLoaded` (or runs at once if the document
//! is already parsed), runs controller startup against `localStorage` and
//! `<html>`, then listens for `change` on the toggle checkbox. The listener
//! closure owns the controller for the page lifetime.
//!
//! Pages with server-rendered markup install it either through the module
//! start function (`standalone` feature) or by calling `installTheme` from
//! JS. Leptos apps using `ThemeToggle` must do neither: the component owns
//! the checkbox, and a second listener would double every write.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged, not worked around: the theme is cosmetic
//! and a page with disabled storage simply keeps its stylesheet default.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::ports::{PreferenceStore, ThemeRoot, ToggleControl};
use crate::theme::Theme;

/// Controller over the live page.
pub type BrowserController = ThemeController<LocalStorage, DocumentRoot, CheckboxToggle>;

fn js_error(context: &str, err: &JsValue) -> String {
    match err.as_string() {
        Some(message) => format!("{context}: {message}"),
        None => format!("{context}: {err:?}"),
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

fn to_js(err: ThemeError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn document() -> Result<Document, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Dom("no document".to_owned()))
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageUnavailable`] if the window has no
    /// storage or access to it is denied.
    pub fn open() -> Result<Self, ThemeError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error("getItem", &e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error("setItem", &e)))
    }
}

/// `document.documentElement`.
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// # Errors
    ///
    /// Returns [`ThemeError::Dom`] if the document has no root element.
    pub fn from_document(document: &Document) -> Result<Self, ThemeError> {
        let element = document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("no document element".to_owned()))?;
        Ok(Self { element })
    }
}

impl ThemeRoot for DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_error("setAttribute", &e)))
    }
}

/// `<input type="checkbox">` toggle.
#[derive(Clone)]
pub struct CheckboxToggle {
    input: HtmlInputElement,
}

impl CheckboxToggle {
    /// Look up the toggle by id. Missing elements and non-inputs yield `None`.
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| Self { input })
    }
}

impl ToggleControl for CheckboxToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.input.set_checked(checked);
    }
}

// =============================================================================
// WIRING
// =============================================================================

/// Build a controller bound to the page's storage, root and toggle.
///
/// # Errors
///
/// Returns an error if storage or the document root is unavailable.
pub fn open(config: ThemeConfig) -> Result<BrowserController, ThemeError> {
    let document = document()?;
    let toggle = CheckboxToggle::find(&document, &config.toggle_id);
    let root = DocumentRoot::from_document(&document)?;
    Ok(ThemeController::new(config, LocalStorage::open()?, root, toggle))
}

/// Build a controller that ignores any toggle element; for hosts that render
/// and track the checkbox themselves.
///
/// # Errors
///
/// Same as [`open`].
pub fn open_detached(config: ThemeConfig) -> Result<BrowserController, ThemeError> {
    let document = document()?;
    let root = DocumentRoot::from_document(&document)?;
    Ok(ThemeController::new(config, LocalStorage::open()?, root, None))
}

/// Run startup once the document is parsed and wire the toggle listener.
///
/// # Errors
///
/// Returns an error if the config is invalid, the document is unreachable,
/// or the ready listener cannot be registered. Startup failures after the
/// document is ready are logged.
pub fn install(config: ThemeConfig) -> Result<(), ThemeError> {
    config.validate()?;
    let document = document()?;

    if document.ready_state() != "loading" {
        run(config);
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || run(config));
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|e| ThemeError::Dom(js_error("addEventListener", &e)))
}

fn run(config: ThemeConfig) {
    if let Err(err) = start_controller(config) {
        log::error!("theme startup failed: {err}");
    }
}

fn start_controller(config: ThemeConfig) -> Result<(), ThemeError> {
    let mut controller = open(config)?;
    let theme = controller.startup()?;
    log::debug!("applied {theme} theme on load");

    let Some(toggle) = controller.toggle().cloned() else {
        log::debug!("no #{} element; change handling disabled", controller.config().toggle_id);
        return Ok(());
    };

    let on_change = Closure::wrap(Box::new(move || match controller.handle_change() {
        Ok(Some(theme)) => log::debug!("switched to {theme} theme"),
        Ok(None) => {}
        Err(err) => log::error!("theme change failed: {err}"),
    }) as Box<dyn FnMut()>);

    toggle
        .input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Dom(js_error("addEventListener", &e)))?;
    on_change.forget();
    Ok(())
}

/// Install with a JSON config; missing fields take their defaults.
///
/// # Errors
///
/// Returns a JS `Error` if the config is rejected or the document is
/// unreachable.
#[wasm_bindgen(js_name = installTheme)]
pub fn install_json(config: &str) -> Result<(), JsValue> {
    init_logging();
    let config = ThemeConfig::from_json(config).map_err(to_js)?;
    install(config).map_err(to_js)
}

/// Switch theme from host JS by name (`"dark"` or `"light"`).
///
/// Setting the checkbox programmatically fires no `change` event, so an
/// installed listener does not write a second time.
///
/// # Errors
///
/// Returns a JS `Error` for an unknown name, an invalid config, or when
/// storage or the document root is unavailable.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme_json(name: &str, config: Option<String>) -> Result<(), JsValue> {
    let theme: Theme = name.parse().map_err(to_js)?;
    let config = match config {
        Some(raw) => ThemeConfig::from_json(&raw).map_err(to_js)?,
        None => ThemeConfig::default(),
    };
    let applied = open(config).and_then(|mut c| c.set_theme(theme)).map_err(to_js)?;
    log::debug!("switched to {applied} theme from host");
    Ok(())
}

/// Module entry point: set up console logging and install the default config.
///
/// # Errors
///
/// Returns a JS `Error` if the document is unreachable.
#[cfg(feature = "standalone")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    install(ThemeConfig::default()).map_err(to_js)
}
