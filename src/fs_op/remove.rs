use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed {
    /// Something existed at the path and was removed.
    Yes,
    /// Nothing existed at the path.
    Absent,
}

/// Remove a file or directory at `path`.
///
/// Directories are removed recursively. Removal of a non-existent path is a
/// no-op reported as `Removed::Absent`, so teardown can run unconditionally.
/// Symlinks are removed without touching their target.
pub fn remove_path(path: impl AsRef<Path>) -> io::Result<Removed> {
    let p = path.as_ref();

    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Removed::Absent),
        Err(e) => return Err(e),
    };

    if meta.is_dir() {
        fs::remove_dir_all(p)?;
    } else {
        fs::remove_file(p)?;
    }
    tracing::debug!("removed {}", p.display());
    Ok(Removed::Yes)
}
