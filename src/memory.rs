//! In-memory capabilities.
//!
//! Stand-ins for browser storage and the DOM in unit tests. Mutation
//! counters let tests assert how many writes an event caused.

use std::collections::HashMap;

use crate::error::ThemeError;
use crate::ports::{PreferenceStore, ThemeRoot, ToggleControl};

/// `HashMap`-backed preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, ..Self::default() }
    }

    /// Store that fails every read and write, like disabled browser storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

/// Attribute map standing in for `<html>`.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    attributes: HashMap<String, String>,
    mutations: usize,
    failing: bool,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root whose `set_attribute` always fails.
    #[must_use]
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of `set_attribute` calls.
    #[must_use]
    pub fn mutations(&self) -> usize {
        self.mutations
    }
}

impl ThemeRoot for MemoryRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        if self.failing {
            return Err(ThemeError::Dom(format!("cannot set {name}")));
        }
        self.attributes.insert(name.to_owned(), value.to_owned());
        self.mutations += 1;
        Ok(())
    }
}

/// Plain boolean checkbox.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryToggle {
    pub checked: bool,
}

impl MemoryToggle {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }
}

impl ToggleControl for MemoryToggle {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}
