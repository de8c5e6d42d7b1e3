//! Persisted settings store.
//!
//! A flat `section -> key -> value` map kept in insertion order. With the
//! `std` feature it is stored on disk as TOML, one table per section:
//!
//! ```text
//! [Backlight]
//! r = 255
//! g = 255
//!
//! [Display]
//! contrast = 40
//! ```
//!
//! Keys are case-insensitive, section names are not. Values are kept as
//! text; files that fail to parse are skipped whole and malformed values are
//! replaced by defaults, never rejected.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::Display;
use core::str::FromStr;

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use crate::error::ConfigError;

/// Config file in the working directory; also the file flushed to
pub const LOCAL_CONFIG_FILE: &str = "dot3k.cfg";

/// Config file in the user's home directory
pub const USER_CONFIG_FILE: &str = ".dot3k.cfg";

/// Named group of settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
        {
            entry.1 = value.to_string();
        } else {
            self.entries
                .push((key.to_ascii_lowercase(), value.to_string()));
        }
    }
}

/// Settings shared by the menu and every option
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    sections: Vec<Section>,
    /// File written by [`ConfigStore::flush`]; `None` keeps the store in memory
    #[cfg(feature = "std")]
    primary: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.entries.is_empty())
    }

    /// Sections in insertion order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Set a value, creating the section if needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let index = self.section_index(section);
        self.sections[index].set(key, value);
    }

    /// Get a value, seeding `default` into the store when absent
    pub fn get_or_insert<'a>(&'a mut self, section: &str, key: &str, default: &'a str) -> &'a str {
        let index = self.section_index(section);
        let section = &mut self.sections[index];
        if section.get(key).is_none() {
            section.set(key, default);
        }
        section.get(key).unwrap_or(default)
    }

    /// Get a parsed value, seeding `default` when absent.
    ///
    /// A value that fails to parse is replaced by `default` in the store.
    pub fn get_parsed_or_insert<T>(&mut self, section: &str, key: &str, default: T) -> T
    where
        T: FromStr + Display,
    {
        match self.get(section, key).map(str::parse::<T>) {
            Some(Ok(value)) => value,
            Some(Err(_)) => {
                log::warn!("config value {}.{} is malformed, reset to {}", section, key, default);
                self.set(section, key, &default.to_string());
                default
            }
            None => {
                self.set(section, key, &default.to_string());
                default
            }
        }
    }

    /// Copy every entry of `other` whose key is not already present
    pub fn merge_missing(&mut self, other: &ConfigStore) {
        for section in &other.sections {
            let index = self.section_index(&section.name);
            for (key, value) in &section.entries {
                if self.sections[index].get(key).is_none() {
                    self.sections[index].set(key, value);
                }
            }
        }
    }

    fn section_index(&mut self, name: &str) -> usize {
        if let Some(index) = self.sections.iter().position(|s| s.name == name) {
            return index;
        }
        self.sections.push(Section::new(name));
        self.sections.len() - 1
    }
}

#[cfg(feature = "std")]
impl ConfigStore {
    /// Parse TOML text, one table per section.
    ///
    /// Scalar values are kept as their text. Top-level keys and nested
    /// arrays or tables have no place in a section and are skipped.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        let mut store = Self::new();
        for (name, value) in table {
            let toml::Value::Table(entries) = value else {
                log::warn!("config key {} is outside any section, skipped", name);
                continue;
            };
            let index = store.section_index(&name);
            for (key, value) in entries {
                match scalar_text(&value) {
                    Some(text) => store.sections[index].set(&key, &text),
                    None => log::warn!("config value {}.{} is not a scalar, skipped", name, key),
                }
            }
        }
        Ok(store)
    }

    /// Parse TOML text, falling back to an empty store when it is malformed
    pub fn parse(text: &str) -> Self {
        Self::from_toml_str(text).unwrap_or_else(|err| {
            log::warn!("ignoring malformed config: {}", err);
            Self::new()
        })
    }

    /// Render the store as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut table = toml::Table::new();
        for section in &self.sections {
            let entries = section
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), typed_value(value)))
                .collect();
            table.insert(section.name.clone(), toml::Value::Table(entries));
        }
        Ok(toml::to_string_pretty(&table)?)
    }

    /// Load settings from `paths` in order.
    ///
    /// The first file providing a key wins. Missing files are ignored,
    /// unreadable or malformed ones are logged and skipped. The first path
    /// becomes the primary file used by [`ConfigStore::flush`].
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut store = Self::new();
        for path in paths {
            let path = path.as_ref();
            match std::fs::read_to_string(path) {
                Ok(text) => match Self::from_toml_str(&text) {
                    Ok(loaded) => {
                        log::debug!("loaded config from {}", path.display());
                        store.merge_missing(&loaded);
                    }
                    Err(err) => {
                        log::warn!("skipping malformed config {}: {}", path.display(), err);
                    }
                },
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => {
                    log::warn!("skipping unreadable config {}: {}", path.display(), err);
                }
            }
        }
        store.primary = paths.first().map(|p| p.as_ref().to_path_buf());
        store
    }

    /// Local file first, then the file in `$HOME`
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = alloc::vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(home) = std::env::var_os("HOME") {
            paths.push(PathBuf::from(home).join(USER_CONFIG_FILE));
        }
        paths
    }

    /// Load from [`ConfigStore::default_paths`]
    pub fn load_default() -> Self {
        Self::load(&Self::default_paths())
    }

    pub fn primary_path(&self) -> Option<&Path> {
        self.primary.as_deref()
    }

    pub fn set_primary_path(&mut self, path: impl Into<PathBuf>) {
        self.primary = Some(path.into());
    }

    /// Write the whole store to the primary file.
    ///
    /// In-memory stores have nothing to write and succeed.
    pub fn flush(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.primary else {
            return Ok(());
        };
        let text = self.to_toml_string()?;
        std::fs::write(path, text).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(feature = "std")]
fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(text) => Some(text.clone()),
        toml::Value::Integer(value) => Some(value.to_string()),
        toml::Value::Float(value) => Some(value.to_string()),
        toml::Value::Boolean(value) => Some(value.to_string()),
        toml::Value::Datetime(value) => Some(value.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

/// Write numbers and booleans bare so the file reads `r = 255`
#[cfg(feature = "std")]
fn typed_value(text: &str) -> toml::Value {
    if let Ok(value) = text.parse::<i64>() {
        return toml::Value::Integer(value);
    }
    if let Ok(value) = text.parse::<bool>() {
        return toml::Value::Boolean(value);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => toml::Value::Float(value),
        _ => toml::Value::String(text.to_string()),
    }
}
