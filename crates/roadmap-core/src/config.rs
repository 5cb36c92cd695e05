//! Client configuration.
//!
//! Settings come from three layers, lowest precedence first:
//!
//! 1. a JSON file, by default `$XDG_CONFIG_HOME/roadmap/config.json`
//! 2. the `ROADMAP_API_URL` / `ROADMAP_USER_ID` environment variables
//! 3. command-line flags
//!
//! The library only reads the file; the environment and flag layers are
//! resolved by the front end and merged with [`Config::with_overrides`].
//!
//! ```json
//! { "api_url": "https://plans.example.com", "user_id": "user_2abc" }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyncError};

/// File name looked up under the XDG config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Connection settings for the plan store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the plan store API
    #[serde(default)]
    pub api_url: Option<String>,
    /// Opaque user id issued by the identity provider
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or from the default XDG location when
    /// `path` is `None`.
    ///
    /// An explicit path must exist. A missing default file yields an empty
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::FileSystem` if the file cannot be read and
    /// `SyncError::Configuration` if it is not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Read a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| SyncError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            SyncError::configuration(format!("Invalid config file '{}': {e}", path.display()))
        })
    }

    /// Existing configuration file under the XDG config directories, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("roadmap").find_config_file(CONFIG_FILE_NAME)
    }

    /// Overlay `overrides` on top of this configuration; set fields win.
    pub fn with_overrides(self, overrides: Config) -> Self {
        Self {
            api_url: overrides.api_url.or(self.api_url),
            user_id: overrides.user_id.or(self.user_id),
        }
    }

    /// The configured API URL.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` when no non-empty URL is set.
    pub fn api_url(&self) -> Result<&str> {
        non_empty(self.api_url.as_deref()).ok_or_else(|| {
            SyncError::configuration("missing API URL; pass --api-url or set ROADMAP_API_URL")
        })
    }

    /// The configured user id.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` when no non-empty user id is set.
    pub fn user_id(&self) -> Result<&str> {
        non_empty(self.user_id.as_deref()).ok_or_else(|| {
            SyncError::configuration("missing user id; pass --user-id or set ROADMAP_USER_ID")
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
