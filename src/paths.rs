//! Where the host script and its manifests live.

use std::path::{Path, PathBuf};

use crate::browser::Browser;
use crate::config::Environment;

/// File name of the installed host script.
pub const HOST_FILENAME: &str = "streamkeys_mpris.py";

/// File name of the manifest, identical for every browser.
pub const MANIFEST_FILENAME: &str = "org.mpris.streamkeys_host.json";

/// Config directories of the Chrome-like browsers we register with,
/// relative to the config home.
const CHROME_BRANDS: [&str; 2] = ["chromium", "google-chrome"];

/// Computes manifest and host locations for a given environment.
#[derive(Debug, Clone)]
pub struct PathResolver {
    env: Environment,
}

impl PathResolver {
    /// Resolver for `env`.
    pub fn new(env: &Environment) -> Self {
        Self { env: env.clone() }
    }

    /// Config roots of every known Chrome-like browser, present or not.
    pub fn chrome_config_roots(&self) -> Vec<PathBuf> {
        CHROME_BRANDS
            .iter()
            .map(|brand| self.env.config_home.join(brand))
            .collect()
    }

    /// Manifest paths for the Chrome-like browsers installed on this machine.
    ///
    /// A browser counts as installed when its config root exists.
    pub fn chrome_manifest_paths(&self) -> Vec<PathBuf> {
        self.chrome_config_roots()
            .into_iter()
            .filter(|root| root.exists())
            .map(|root| root.join("NativeMessagingHosts").join(MANIFEST_FILENAME))
            .collect()
    }

    /// The Firefox manifest path. Always returned, whether Firefox is
    /// installed or not.
    pub fn firefox_manifest_paths(&self) -> Vec<PathBuf> {
        vec![self
            .env
            .home
            .join(".mozilla")
            .join("native-messaging-hosts")
            .join(MANIFEST_FILENAME)]
    }

    /// Manifest paths for `browser`.
    pub fn manifest_paths(&self, browser: Browser) -> Vec<PathBuf> {
        match browser {
            Browser::Chrome => self.chrome_manifest_paths(),
            Browser::Firefox => self.firefox_manifest_paths(),
        }
    }

    /// Installed host script inside `install_dir`.
    pub fn host_path(install_dir: &Path) -> PathBuf {
        install_dir.join(HOST_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandbox() -> (tempfile::TempDir, PathResolver) {
        let dir = tempfile::tempdir().unwrap();
        let env = Environment::new(dir.path().join("home"), dir.path().join("xdg"));
        (dir, PathResolver::new(&env))
    }

    #[test]
    fn test_chrome_roots_follow_config_home() {
        let (dir, paths) = sandbox();
        assert_eq!(
            paths.chrome_config_roots(),
            vec![
                dir.path().join("xdg/chromium"),
                dir.path().join("xdg/google-chrome"),
            ]
        );
    }

    #[test]
    fn test_no_chrome_installed_gives_no_paths() {
        let (_dir, paths) = sandbox();
        assert!(paths.chrome_manifest_paths().is_empty());
        assert!(paths.manifest_paths(Browser::Chrome).is_empty());
    }

    #[test]
    fn test_only_existing_chrome_roots_are_used() {
        let (dir, paths) = sandbox();
        std::fs::create_dir_all(dir.path().join("xdg/google-chrome")).unwrap();

        assert_eq!(
            paths.chrome_manifest_paths(),
            vec![dir
                .path()
                .join("xdg/google-chrome/NativeMessagingHosts")
                .join(MANIFEST_FILENAME)]
        );

        std::fs::create_dir_all(dir.path().join("xdg/chromium")).unwrap();
        assert_eq!(paths.chrome_manifest_paths().len(), 2);
    }

    #[test]
    fn test_firefox_path_is_not_existence_gated() {
        let (dir, paths) = sandbox();
        assert!(!dir.path().join("home/.mozilla").exists());
        assert_eq!(
            paths.manifest_paths(Browser::Firefox),
            vec![dir
                .path()
                .join("home/.mozilla/native-messaging-hosts")
                .join(MANIFEST_FILENAME)]
        );
    }

    #[test]
    fn test_host_path() {
        assert_eq!(
            PathResolver::host_path(Path::new("/opt/sk")),
            PathBuf::from("/opt/sk/streamkeys_mpris.py")
        );
    }
}
