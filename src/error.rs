//! Library error type.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::deps::Dependency;

/// Errors raised while installing or removing the native messaging host.
#[derive(Debug, Error)]
pub enum Error {
    /// The extension ID does not have the shape the target browser requires.
    #[error("Not valid extension ID: {0}")]
    InvalidExtensionId(String),

    /// A runtime dependency of the host script is not installed.
    #[error("Required dependency `{0}' not found")]
    MissingDependency(Dependency),

    /// A filesystem operation failed.
    #[error("Failed to {action} {}", .path.display())]
    Io {
        /// What was being attempted, e.g. "write manifest".
        action: &'static str,
        /// The path the operation was applied to.
        path: PathBuf,
        /// The underlying OS error.
        source: std::io::Error,
    },

    /// The manifest could not be encoded as JSON.
    #[error("Failed to serialize manifest")]
    Serialize(#[from] serde_json::Error),

    /// The installer config file exists but is not valid TOML.
    #[error("Failed to parse config at {}", .path.display())]
    Config {
        /// Location of the offending file.
        path: PathBuf,
        /// The parse error.
        source: toml::de::Error,
    },

    /// Neither the OS nor the environment reports a home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Attach the attempted action and the path to an I/O failure.
pub(crate) trait IoContext<T> {
    fn at(self, action: &'static str, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at(self, action: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Io {
            action,
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_action_and_path() {
        let err = Err::<(), _>(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
            .at("write manifest", Path::new("/tmp/host.json"))
            .unwrap_err();
        let msg = err.to_string();
        assert_eq!(msg, "Failed to write manifest /tmp/host.json");
    }

    #[test]
    fn test_cause_is_reported_once_in_chain() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = Err::<(), _>(source)
            .at("write manifest", Path::new("/tmp/host.json"))
            .unwrap_err();
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("disk on fire").count(), 1, "{chain}");
        assert_eq!(chain, "Failed to write manifest /tmp/host.json: disk on fire");
    }

    #[test]
    fn test_config_error_reports_parse_failure_once() {
        let source = toml::from_str::<toml::Value>("install_dir = [").unwrap_err();
        let detail = source.to_string();
        let err = Error::Config {
            path: PathBuf::from("/tmp/installer.toml"),
            source,
        };
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches(detail.as_str()).count(), 1, "{chain}");
    }

    #[test]
    fn test_missing_dependency_names_package() {
        let err = Error::MissingDependency(Dependency::PyDbus);
        assert_eq!(err.to_string(), "Required dependency `python3-pydbus' not found");
    }
}
