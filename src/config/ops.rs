use std::path::{Path, PathBuf};

use super::{Config, Environment, APP_DIR_NAME};
use crate::browser::FIREFOX_EXTENSION_ID;
use crate::error::{Error, IoContext, Result};

/// File the host script is copied from when nothing else is configured.
pub const DEFAULT_HOST_SOURCE: &str = "mpris.py";

impl Config {
    /// Location of the installer config file.
    pub fn path(env: &Environment) -> PathBuf {
        env.config_home.join(APP_DIR_NAME).join("installer.toml")
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load(env: &Environment) -> Result<Self> {
        Self::load_from(&Self::path(env))
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).at("read config", path)?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Install directory from the config file, falling back to the default.
    pub fn install_dir(&self, env: &Environment) -> PathBuf {
        self.install_dir
            .clone()
            .unwrap_or_else(|| env.default_install_dir())
    }

    /// Host script source, falling back to `mpris.py` beside the executable.
    pub fn host_source(&self) -> Result<PathBuf> {
        if let Some(path) = &self.host_source {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe().at("locate", Path::new("current executable"))?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(dir.join(DEFAULT_HOST_SOURCE))
    }

    /// Extension ID for Firefox installs.
    pub fn firefox_extension_id(&self) -> &str {
        self.firefox
            .extension_id
            .as_deref()
            .unwrap_or(FIREFOX_EXTENSION_ID)
    }
}
