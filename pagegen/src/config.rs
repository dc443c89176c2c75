//! Configuration file support for mkpage.
//!
//! Loads optional `.mkpage/config.toml` from the working directory, or the
//! file given with `--config`.
//!
//! ```toml
//! [page]
//! title = "Marketing"
//! lang = "en"
//! tailwind = true
//! tailwind_cdn = "https://cdn.tailwindcss.com"
//!
//! [output]
//! path = "public/index.html"
//! fragment = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{PageGenError, Result};

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = ".mkpage/config.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageGenConfig {
    /// Document settings
    pub page: PageConfig,
    /// Where and what to write
    pub output: OutputConfig,
}

/// `[page]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: Option<String>,
    pub lang: Option<String>,
    /// Set to `false` to leave out the Tailwind CDN script
    pub tailwind: Option<bool>,
    pub tailwind_cdn: Option<String>,
}

/// `[output]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<PathBuf>,
    pub fragment: Option<bool>,
}

impl PageGenConfig {
    /// Load the explicit config file, or the default one if it exists.
    ///
    /// An explicit file must load cleanly. The implicit file is optional and
    /// a broken one only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))),
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| PageGenError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| PageGenError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`, falling back to defaults when it is missing
    /// or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
