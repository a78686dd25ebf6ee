use super::*;
use crate::memory::{MemoryRoot, MemoryStore, MemoryToggle};

type MemoryController = ThemeController<MemoryStore, MemoryRoot, MemoryToggle>;

// =============================================================
// Helpers
// =============================================================

const KEY: &str = "fhd-theme";
const ATTR: &str = "data-theme";

fn controller(store: MemoryStore, toggle: Option<MemoryToggle>) -> MemoryController {
    ThemeController::new(ThemeConfig::default(), store, MemoryRoot::new(), toggle)
}

fn with_stored(value: &str) -> MemoryController {
    controller(MemoryStore::with_entry(KEY, value), Some(MemoryToggle::new(false)))
}

fn attribute(c: &MemoryController) -> Option<&str> {
    c.root().attribute(ATTR)
}

fn checked(c: &MemoryController) -> Option<bool> {
    c.toggle().map(|t| t.checked)
}

// =============================================================
// Startup
// =============================================================

#[test]
fn startup_without_stored_value_applies_dark() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(false)));
    assert_eq!(c.startup().unwrap(), Theme::Dark);
    assert_eq!(attribute(&c), Some("dark"));
    assert_eq!(checked(&c), Some(true));
    assert_eq!(c.active(), Theme::Dark);
}

#[test]
fn startup_with_stored_light_applies_light() {
    let mut c = controller(MemoryStore::with_entry(KEY, "light"), Some(MemoryToggle::new(true)));
    assert_eq!(c.startup().unwrap(), Theme::Light);
    assert_eq!(attribute(&c), Some("light"));
    assert_eq!(checked(&c), Some(false));
}

#[test]
fn startup_with_stored_dark_or_other_applies_dark() {
    for value in ["dark", "", "Light", "blue"] {
        let mut c = with_stored(value);
        assert_eq!(c.startup().unwrap(), Theme::Dark, "stored {value:?}");
        assert_eq!(attribute(&c), Some("dark"));
        assert_eq!(checked(&c), Some(true));
    }
}

#[test]
fn startup_does_not_write_storage() {
    let mut c = with_stored("light");
    c.startup().unwrap();
    assert_eq!(c.store().writes(), 0);
    assert_eq!(c.root().mutations(), 1);
}

#[test]
fn startup_without_toggle_still_applies_attribute() {
    let mut c = controller(MemoryStore::with_entry(KEY, "light"), None);
    assert!(!c.has_toggle());
    assert_eq!(c.startup().unwrap(), Theme::Light);
    assert_eq!(attribute(&c), Some("light"));
    assert_eq!(checked(&c), None);
}

#[test]
fn startup_uses_configured_names() {
    let config = ThemeConfig {
        storage_key: "custom-key".to_owned(),
        attribute: "data-mode".to_owned(),
        ..ThemeConfig::default()
    };
    let store = MemoryStore::with_entry("custom-key", "light");
    let mut c: MemoryController = ThemeController::new(config, store, MemoryRoot::new(), None);
    c.startup().unwrap();
    assert_eq!(c.root().attribute("data-mode"), Some("light"));
    assert_eq!(c.root().attribute(ATTR), None);
}

#[test]
fn startup_surfaces_storage_failure_without_touching_dom() {
    let mut c = controller(MemoryStore::unavailable(), Some(MemoryToggle::new(false)));
    let err = c.startup().unwrap_err();
    assert!(matches!(err, ThemeError::StorageUnavailable));
    assert_eq!(attribute(&c), None);
    assert_eq!(checked(&c), Some(false));
}

// =============================================================
// Change handling
// =============================================================

#[test]
fn checking_toggle_applies_and_persists_dark() {
    let mut c = with_stored("light");
    c.startup().unwrap();

    c.toggle_mut().unwrap().set_checked(true);
    assert_eq!(c.handle_change().unwrap(), Some(Theme::Dark));
    assert_eq!(attribute(&c), Some("dark"));
    assert_eq!(c.store().get(KEY), Some("dark"));
}

#[test]
fn unchecking_toggle_applies_and_persists_light() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(false)));
    c.startup().unwrap();

    c.toggle_mut().unwrap().set_checked(false);
    assert_eq!(c.handle_change().unwrap(), Some(Theme::Light));
    assert_eq!(attribute(&c), Some("light"));
    assert_eq!(c.store().get(KEY), Some("light"));
    assert_eq!(c.active(), Theme::Light);
}

#[test]
fn repeated_change_with_same_state_leaves_values_unchanged() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(true)));
    c.startup().unwrap();

    c.apply_checked(false).unwrap();
    let attr_after_first = attribute(&c).map(str::to_owned);
    let stored_after_first = c.store().get(KEY).map(str::to_owned);

    c.apply_checked(false).unwrap();
    assert_eq!(attribute(&c).map(str::to_owned), attr_after_first);
    assert_eq!(c.store().get(KEY).map(str::to_owned), stored_after_first);
    assert_eq!(c.store().writes(), 2);
}

#[test]
fn change_without_toggle_is_noop() {
    let mut c = controller(MemoryStore::new(), None);
    c.startup().unwrap();
    assert_eq!(c.handle_change().unwrap(), None);
    assert_eq!(c.store().writes(), 0);
    assert_eq!(c.root().mutations(), 1);
}

#[test]
fn change_then_restart_restores_persisted_theme() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(true)));
    c.startup().unwrap();
    c.apply_checked(false).unwrap();

    let store = c.store().clone();
    let mut reloaded = controller(store, Some(MemoryToggle::new(true)));
    assert_eq!(reloaded.startup().unwrap(), Theme::Light);
    assert_eq!(checked(&reloaded), Some(false));
}

#[test]
fn change_surfaces_storage_failure_after_applying_attribute() {
    let mut c = controller(MemoryStore::unavailable(), Some(MemoryToggle::new(true)));
    let err = c.apply_checked(false).unwrap_err();
    assert!(matches!(err, ThemeError::StorageUnavailable));
    assert_eq!(attribute(&c), Some("light"));
}

// =============================================================
// Programmatic changes
// =============================================================

#[test]
fn set_theme_mirrors_onto_toggle_and_persists() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(true)));
    c.startup().unwrap();

    assert_eq!(c.set_theme(Theme::Light).unwrap(), Theme::Light);
    assert_eq!(checked(&c), Some(false));
    assert_eq!(attribute(&c), Some("light"));
    assert_eq!(c.store().get(KEY), Some("light"));

    c.set_theme(c.active().toggled()).unwrap();
    assert_eq!(checked(&c), Some(true));
    assert_eq!(attribute(&c), Some("dark"));
}

// =============================================================
// Attribute failures
// =============================================================

fn failing_root(store: MemoryStore, toggle: MemoryToggle) -> MemoryController {
    ThemeController::new(ThemeConfig::default(), store, MemoryRoot::failing(), Some(toggle))
}

#[test]
fn startup_attribute_failure_leaves_toggle_untouched() {
    let mut c = failing_root(MemoryStore::with_entry(KEY, "light"), MemoryToggle::new(true));
    let err = c.startup().unwrap_err();
    assert!(matches!(err, ThemeError::Dom(_)));
    assert_eq!(checked(&c), Some(true));
    assert_eq!(c.active(), Theme::Dark);
    assert_eq!(attribute(&c), None);
}

#[test]
fn set_theme_attribute_failure_leaves_toggle_and_storage_untouched() {
    let mut c = failing_root(MemoryStore::new(), MemoryToggle::new(true));
    assert!(c.set_theme(Theme::Light).is_err());
    assert_eq!(checked(&c), Some(true));
    assert_eq!(c.active(), Theme::Dark);
    assert_eq!(c.store().writes(), 0);
}

#[test]
fn change_attribute_failure_reverts_toggle_to_active_theme() {
    let mut c = failing_root(MemoryStore::new(), MemoryToggle::new(true));
    c.toggle_mut().unwrap().set_checked(false);
    assert!(c.handle_change().is_err());
    assert_eq!(checked(&c), Some(c.active().is_checked()));
    assert_eq!(checked(&c), Some(true));
    assert_eq!(c.store().writes(), 0);
}
