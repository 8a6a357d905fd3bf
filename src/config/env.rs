//! Environment reader.
//!
//! Snapshots the process environment (after an optional `.env` load) and
//! exposes typed lookups with defaults. An absent variable never fails; a
//! present but unparseable one does, naming the offending key.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::{SettingsError, SettingsResult};

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    /// Load `.env` from the working directory if present, then snapshot the
    /// process environment. A missing `.env` is not an error.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::snapshot()
    }

    /// Load an explicitly named env file, then snapshot. Unlike [`Env::load`],
    /// a file the operator pointed at must exist and parse.
    pub fn load_file(path: &Path) -> SettingsResult<Self> {
        dotenvy::from_path(path)?;
        Ok(Self::snapshot())
    }

    fn snapshot() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a reader from an in-memory map, bypassing the process
    /// environment. Used by tests to make resolution deterministic.
    pub fn from_iter<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// String value, or the default when unset.
    pub fn string(&self, key: &str, default: &str) -> String {
        self.raw(key).unwrap_or(default).to_string()
    }

    /// Non-empty value, if any. An empty string counts as unset; gating
    /// variables like DB_HOST use this so `DB_HOST=` does not flip a branch.
    pub fn opt(&self, key: &str) -> Option<&str> {
        self.raw(key).filter(|v| !v.is_empty())
    }

    /// Boolean flag. Accepts true/false, 1/0, yes/no, on/off in any case.
    pub fn boolean(&self, key: &'static str, default: bool) -> SettingsResult<bool> {
        match self.opt(key) {
            None => Ok(default),
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(SettingsError::invalid(key, v, "a boolean (true/false)")),
            },
        }
    }

    /// Comma-separated list. Items are trimmed and empty items dropped, so
    /// `a, b,,c` resolves to `["a", "b", "c"]`.
    pub fn list(&self, key: &str, default: &[&str]) -> Vec<String> {
        match self.opt(key) {
            None => default.iter().map(|s| (*s).to_string()).collect(),
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// TCP port number.
    pub fn port(&self, key: &'static str, default: u16) -> SettingsResult<u16> {
        match self.opt(key) {
            None => Ok(default),
            Some(v) => v
                .parse()
                .map_err(|_| SettingsError::invalid(key, v, "a port number")),
        }
    }
}
