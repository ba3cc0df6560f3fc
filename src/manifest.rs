//! The JSON manifest a browser reads to find the host.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::browser::{Browser, ExtensionId};
use crate::error::Result;

/// Name the extension uses to connect to the host.
pub const HOST_NAME: &str = "org.mpris.streamkeys_host";

/// Human-readable description shown by the browser.
pub const HOST_DESCRIPTION: &str = "Streamkeys MPRIS native messaging host";

/// Native messaging host manifest, as read by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostManifest {
    /// Host identifier, see [`HOST_NAME`].
    pub name: String,
    /// See [`HOST_DESCRIPTION`].
    pub description: String,
    /// Absolute path of the installed host script.
    pub path: PathBuf,
    /// Transport between browser and host; always `stdio`.
    #[serde(rename = "type")]
    pub transport: String,
    /// Who may launch the host.
    #[serde(flatten)]
    pub allowed: AllowList,
}

/// Allowed callers, keyed the way each browser expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllowList {
    /// Chrome: `chrome-extension://<id>/` origins.
    #[serde(rename = "allowed_origins")]
    Origins(Vec<String>),
    /// Firefox: raw extension IDs.
    #[serde(rename = "allowed_extensions")]
    Extensions(Vec<String>),
}

impl HostManifest {
    /// Empty manifest for `browser`, with no path and nobody allowed.
    pub fn template(browser: Browser) -> Self {
        let allowed = match browser {
            Browser::Chrome => AllowList::Origins(Vec::new()),
            Browser::Firefox => AllowList::Extensions(Vec::new()),
        };
        Self {
            name: HOST_NAME.to_string(),
            description: HOST_DESCRIPTION.to_string(),
            path: PathBuf::new(),
            transport: "stdio".to_string(),
            allowed,
        }
    }

    /// Manifest pointing at `host_path` that admits exactly `id`.
    pub fn new(browser: Browser, host_path: &Path, id: &ExtensionId) -> Self {
        let mut manifest = Self::template(browser);
        manifest.path = host_path.to_path_buf();
        let entry = id.allowed_entry(browser);
        match &mut manifest.allowed {
            AllowList::Origins(list) | AllowList::Extensions(list) => list.push(entry),
        }
        manifest
    }

    /// Pretty-printed JSON, as written to disk.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
