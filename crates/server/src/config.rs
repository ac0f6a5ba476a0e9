// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags and environment variables (see [`crate::cli::Args`]).
//!
//! ```toml
//! bind = "0.0.0.0:3000"
//! database = "/var/lib/trello-manager/cards.db"
//! base_path = "/trello-manager"
//! workers = 8
//! log_file = "/var/log/trello-manager.log"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DEFAULT_DATABASE: &str = "trello-manager.db";
const DEFAULT_BASE_PATH: &str = "/trello-manager";
const DEFAULT_WORKERS: usize = 4;

/// Effective server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Path of the SQLite database file.
    pub database: PathBuf,
    /// Route prefix all endpoints are mounted under.
    pub base_path: String,
    /// Number of request-handling threads.
    pub workers: usize,
    /// Log file; logs go to stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database: PathBuf::from(DEFAULT_DATABASE),
            base_path: DEFAULT_BASE_PATH.to_string(),
            workers: DEFAULT_WORKERS,
            log_file: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub database: Option<PathBuf>,
    pub base_path: Option<String>,
    pub workers: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective configuration: defaults, then `file`, then `overrides`.
    pub fn resolve(file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match file {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.apply(overrides);
        config.validate()
    }

    /// Apply overrides on top of the current values.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(ref database) = overrides.database {
            self.database = database.clone();
        }
        if let Some(ref base_path) = overrides.base_path {
            self.base_path = base_path.clone();
        }
        if let Some(workers) = overrides.workers {
            self.workers = workers;
        }
        if let Some(ref log_file) = overrides.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    /// Check invariants and normalize the base path.
    pub fn validate(mut self) -> Result<Self> {
        if self.workers == 0 {
            return Err(Error::InvalidConfig("workers must be at least 1".into()));
        }
        if self.database.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("database path must not be empty".into()));
        }
        if self.base_path.contains(&['?', '#', ' '][..]) {
            return Err(Error::InvalidConfig(format!(
                "base_path '{}' contains invalid characters",
                self.base_path
            )));
        }
        self.base_path = normalize_base_path(&self.base_path);
        Ok(self)
    }
}

/// Normalize a route prefix to a leading slash and no trailing slash.
///
/// The root prefix normalizes to the empty string.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
