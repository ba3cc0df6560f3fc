//! Apply and revert the native messaging registration on disk.

use std::path::{Path, PathBuf};

use crate::browser::{Browser, ExtensionId};
use crate::config::Environment;
use crate::deps::{self, DependencyProbe};
use crate::error::{IoContext, Result};
use crate::manifest::HostManifest;
use crate::paths::PathResolver;

mod write;

pub use write::{HOST_MODE, MANIFEST_MODE};


/// What a successful install put on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// The copied host script.
    pub host_path: PathBuf,
    /// Every manifest written, in resolution order.
    pub manifests: Vec<PathBuf>,
}

/// What an uninstall removed. Empty when nothing was installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removal {
    /// Files deleted, host script first.
    pub removed: Vec<PathBuf>,
}

/// On-disk state of one registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Browser family inspected.
    pub browser: Browser,
    /// Where the host script is expected.
    pub host_path: PathBuf,
    /// Whether the host script exists.
    pub host_present: bool,
    /// Each resolved manifest path and whether it exists.
    pub manifests: Vec<(PathBuf, bool)>,
}

impl Status {
    /// True when the host script and every resolved manifest exist.
    pub fn is_installed(&self) -> bool {
        self.host_present && self.manifests.iter().all(|(_, present)| *present)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = |present: bool| if present { "present" } else { "missing" };
        writeln!(f, "{} host: {}", self.browser, mark(self.host_present))?;
        writeln!(f, "  {}", self.host_path.display())?;
        if self.manifests.is_empty() {
            writeln!(f, "{} manifests: no browser found", self.browser)?;
        }
        for (path, present) in &self.manifests {
            writeln!(f, "{} manifest: {}", self.browser, mark(*present))?;
            writeln!(f, "  {}", path.display())?;
        }
        Ok(())
    }
}

/// Installs and removes the host for one user environment.
pub struct Installer<'a> {
    paths: PathResolver,
    host_source: PathBuf,
    probe: &'a dyn DependencyProbe,
}

impl<'a> Installer<'a> {
    /// Installer that copies the host script from `host_source` and checks
    /// runtime dependencies with `probe`.
    pub fn new(
        env: &Environment,
        host_source: impl Into<PathBuf>,
        probe: &'a dyn DependencyProbe,
    ) -> Self {
        Self {
            paths: PathResolver::new(env),
            host_source: host_source.into(),
            probe,
        }
    }

    /// Path resolution used by this installer.
    pub const fn paths(&self) -> &PathResolver {
        &self.paths
    }

    /// Copy the host script into `install_dir` and register it with every
    /// `browser` installation found.
    ///
    /// The extension ID and the runtime dependencies are checked before
    /// anything is written. Manifests are written one after another; if one
    /// fails, those already written stay in place.
    pub fn install(
        &self,
        extension_id: &str,
        install_dir: &Path,
        browser: Browser,
    ) -> Result<Installation> {
        let id = ExtensionId::parse(browser, extension_id)?;
        deps::check(self.probe)?;

        let script = std::fs::read(&self.host_source).at("read host script", &self.host_source)?;
        let host_path = PathResolver::host_path(install_dir);
        let host_path = std::path::absolute(&host_path).at("resolve", &host_path)?;
        let manifest = HostManifest::new(browser, &host_path, &id).to_json()?;
        let manifest_paths = self.paths.manifest_paths(browser);

        write::commit(&host_path, &script, HOST_MODE)?;
        tracing::info!("Installed host script at {}", host_path.display());

        if manifest_paths.is_empty() {
            tracing::warn!("No {browser} installation found; no manifest written");
        }
        for path in &manifest_paths {
            write::commit(path, manifest.as_bytes(), MANIFEST_MODE)?;
            tracing::info!("Wrote {browser} manifest to {}", path.display());
        }

        Ok(Installation {
            host_path,
            manifests: manifest_paths,
        })
    }

    /// Remove the host script and every `browser` manifest. Missing files
    /// are not an error, so this is safe to run repeatedly.
    pub fn uninstall(&self, install_dir: &Path, browser: Browser) -> Result<Removal> {
        let mut removal = Removal::default();

        let host_path = PathResolver::host_path(install_dir);
        if write::remove_if_present(&host_path)? {
            tracing::info!("Removed host script {}", host_path.display());
            removal.removed.push(host_path);
        }

        for path in self.paths.manifest_paths(browser) {
            if write::remove_if_present(&path)? {
                tracing::info!("Removed {browser} manifest {}", path.display());
                removal.removed.push(path);
            }
        }

        if removal.removed.is_empty() {
            tracing::info!("Not installed — nothing to remove.");
        }
        Ok(removal)
    }

    /// Inspect what is currently on disk for `browser`.
    pub fn status(&self, install_dir: &Path, browser: Browser) -> Status {
        let host_path = PathResolver::host_path(install_dir);
        let manifests = self
            .paths
            .manifest_paths(browser)
            .into_iter()
            .map(|path| {
                let present = path.is_file();
                (path, present)
            })
            .collect();
        Status {
            browser,
            host_present: host_path.is_file(),
            host_path,
            manifests,
        }
    }
}
