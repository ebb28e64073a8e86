//! Permission helpers for fixture trees.
//!
//! Only permission bits are handled. On non-Unix platforms the mode helpers
//! are no-ops that succeed, since hook scripts there are not gated on an
//! executable bit.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Copy permission bits from `src` to `dst`.
pub fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Apply `mode` to `root` and every entry below it. Symlinks are not
/// followed. Returns the number of entries updated.
pub fn set_mode_recursive(root: &Path, mode: u32) -> io::Result<usize> {
    let mut count = 0usize;
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(walk_to_io)?;
        if entry.path_is_symlink() {
            continue;
        }
        set_mode(entry.path(), mode)?;
        count += 1;
    }
    tracing::debug!("applied mode {:o} to {} entries under {}", mode, count, root.display());
    Ok(count)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

fn walk_to_io(e: walkdir::Error) -> io::Error {
    let msg = e.to_string();
    e.into_io_error().unwrap_or_else(|| io::Error::other(msg))
}
