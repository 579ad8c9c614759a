//! Configuration loading
//!
//! Settings come from `~/.config/entertain-rs/config.toml` (or the path given
//! with `--config`). Every key is optional; a missing file means defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoints: Endpoints,
    pub limits: Limits,
    pub logging: LoggingConfig,
}

/// Base URLs of the content providers
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub tvmaze: String,
    pub itunes: String,
    pub jokes: String,
    pub openlibrary: String,
    pub openlibrary_covers: String,
    pub opentdb: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            tvmaze: "https://api.tvmaze.com".to_string(),
            itunes: "https://itunes.apple.com".to_string(),
            jokes: "https://official-joke-api.appspot.com".to_string(),
            openlibrary: "https://openlibrary.org".to_string(),
            openlibrary_covers: "https://covers.openlibrary.org".to_string(),
            opentdb: "https://opentdb.com".to_string(),
        }
    }
}

/// Fixed batch sizes requested from providers that accept one
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Limits {
    pub books: u32,
    pub trivia: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self { books: 12, trivia: 10 }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, used when `RUST_LOG` is unset
    pub filter: Option<String>,
}

impl Config {
    /// Get the config file path: ~/.config/entertain-rs/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("entertain-rs").join("config.toml"))
    }

    /// Load from an explicit path, or the default location when `None`.
    ///
    /// A missing file yields defaults; an unreadable or invalid file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Cannot read config file {}", path.display())),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
