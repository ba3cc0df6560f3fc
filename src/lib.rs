//! Install and remove the Streamkeys MPRIS native messaging host.
//!
//! The host script is copied into an install directory and registered with
//! Chrome-like browsers or Firefox through a JSON manifest in each browser's
//! `NativeMessagingHosts` directory.

pub mod browser;
pub mod config;
pub mod deps;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod paths;

pub use browser::{Browser, ExtensionId};
pub use config::{Config, Environment};
pub use deps::{Dependency, DependencyProbe, SystemProbe};
pub use error::{Error, Result};
pub use installer::{Installation, Installer, Removal, Status};
pub use manifest::HostManifest;
pub use paths::PathResolver;
