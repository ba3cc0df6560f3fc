//! Browser families and extension identifiers.

use crate::error::{Error, Result};

/// Extension ID used by the Firefox build of Streamkeys.
pub const FIREFOX_EXTENSION_ID: &str = "streamkeys@streamkeys.com";

/// Browser family a host registration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    /// Chromium and Google Chrome, which share one manifest format.
    Chrome,
    /// Mozilla Firefox.
    Firefox,
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chrome => write!(f, "Chrome"),
            Self::Firefox => write!(f, "Firefox"),
        }
    }
}

/// Identifier of the extension allowed to launch the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionId(String);

impl ExtensionId {
    /// Validate `raw` for `browser`.
    ///
    /// Chrome IDs are 32 "mpdecimal" characters: hexadecimal digits spelled
    /// with the letters `a` through `p`. Firefox accepts any string.
    pub fn parse(browser: Browser, raw: &str) -> Result<Self> {
        if browser == Browser::Chrome && !is_mpdecimal_id(raw) {
            return Err(Error::InvalidExtensionId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The ID as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entry for the manifest's allow list.
    pub fn allowed_entry(&self, browser: Browser) -> String {
        match browser {
            Browser::Chrome => format!("chrome-extension://{}/", self.0),
            Browser::Firefox => self.0.clone(),
        }
    }
}

impl std::fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_mpdecimal_id(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| (b'a'..=b'p').contains(&b))
}
