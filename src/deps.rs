//! Runtime dependencies of the host script.
//!
//! The installer never imports these itself; it only checks that the Python
//! interpreter the host runs under can, before touching the filesystem.

use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// A Python binding the host script needs at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// GLib/Gio introspection bindings, used for the main loop.
    GObject,
    /// D-Bus convenience wrapper used to publish the MPRIS interface.
    PyDbus,
}

impl Dependency {
    /// Every dependency, in the order they are checked.
    pub const ALL: [Self; 2] = [Self::GObject, Self::PyDbus];

    /// Distribution package name, as shown to the user.
    pub const fn package(self) -> &'static str {
        match self {
            Self::GObject => "python3-gobject",
            Self::PyDbus => "python3-pydbus",
        }
    }

    /// Python statement that succeeds only when the binding is importable.
    pub const fn import_statement(self) -> &'static str {
        match self {
            Self::GObject => "from gi.repository import GLib, Gio",
            Self::PyDbus => "import pydbus",
        }
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.package())
    }
}

/// Answers whether a dependency is present on this machine.
pub trait DependencyProbe {
    /// Return true if `dep` can be loaded by the host at runtime.
    fn is_available(&self, dep: Dependency) -> bool;
}

/// Probes the system `python3` by running each import statement.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl DependencyProbe for SystemProbe {
    fn is_available(&self, dep: Dependency) -> bool {
        let Ok(python) = which::which("python3") else {
            tracing::debug!("python3 not found in PATH");
            return false;
        };
        let status = Command::new(&python)
            .args(["-c", dep.import_statement()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!("failed to run {}: {e}", python.display());
                false
            }
        }
    }
}

/// Fail with the first dependency the probe reports missing.
pub fn check(probe: &dyn DependencyProbe) -> Result<()> {
    for dep in Dependency::ALL {
        if !probe.is_available(dep) {
            return Err(Error::MissingDependency(dep));
        }
    }
    Ok(())
}

/// Availability of every dependency, for status output.
pub fn report(probe: &dyn DependencyProbe) -> Vec<(Dependency, bool)> {
    Dependency::ALL
        .into_iter()
        .map(|dep| (dep, probe.is_available(dep)))
        .collect()
}
