//! Startup environment and the optional installer config file.

mod ops;

pub use ops::DEFAULT_HOST_SOURCE;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Name of the per-application directory under the config home.
pub const APP_DIR_NAME: &str = "streamkeys";

/// Process environment, captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// The user's home directory.
    pub home: PathBuf,
    /// `$XDG_CONFIG_HOME`, or `~/.config` when unset.
    pub config_home: PathBuf,
}

impl Environment {
    /// Build an environment from explicit directories.
    pub fn new(home: impl Into<PathBuf>, config_home: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            config_home: config_home.into(),
        }
    }

    /// Read the home directory and `XDG_CONFIG_HOME` from the running process.
    pub fn from_process() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        Ok(Self::with_config_override(home, xdg))
    }

    fn with_config_override(home: PathBuf, config_home: Option<PathBuf>) -> Self {
        let config_home = config_home
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| home.join(".config"));
        Self { home, config_home }
    }

    /// Where the host script goes unless overridden.
    pub fn default_install_dir(&self) -> PathBuf {
        self.config_home.join(APP_DIR_NAME)
    }
}

/// Optional settings read from `installer.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory to install the host script into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
    /// Host script to copy, e.g. a packaged `mpris.py`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_source: Option<PathBuf>,
    /// Firefox-specific settings.
    pub firefox: FirefoxConfig,
}

/// The `[firefox]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirefoxConfig {
    /// Extension ID used by `install-ff` when `--id` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_id: Option<String>,
}
