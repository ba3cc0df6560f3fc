use std::io::Write;
use std::path::Path;

use crate::error::{IoContext, Result};

/// Mode of the installed host script: rwxr--r--.
pub const HOST_MODE: u32 = 0o744;

/// Mode of every manifest: rw-r--r--.
pub const MANIFEST_MODE: u32 = 0o644;

/// Write `contents` to `path` through a temporary file in the same
/// directory, so `path` holds either its old contents or the new ones.
/// Parent directories are created as needed.
pub fn commit(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).at("create directory", parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).at("create temporary file in", parent)?;
    tmp.write_all(contents).at("write", tmp.path())?;
    tmp.as_file().sync_all().at("sync", tmp.path())?;
    set_mode(tmp.as_file(), mode).at("set permissions on", tmp.path())?;
    tmp.persist(path).map_err(|e| e.error).at("replace", path)?;

    tracing::debug!("wrote {} ({:o})", path.display(), mode);
    Ok(())
}

/// Remove `path` if it is a regular file. Returns whether anything was removed.
pub fn remove_if_present(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    match std::fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("removed {}", path.display());
            Ok(true)
        }
        // Lost a race with another uninstall; the file is gone either way.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).at("remove", path),
    }
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &std::fs::File, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
