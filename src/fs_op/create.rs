use std::io;
use std::path::Path;

/// Create directory and parents. Succeeds if it already exists as a
/// directory; fails with the underlying IO error if a non-directory is in
/// the way.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let p = path.as_ref();
    std::fs::create_dir_all(p)?;
    tracing::debug!("ensured directory {}", p.display());
    Ok(())
}

/// Write `contents` to `path`, creating parents and replacing any existing
/// file. The write goes through a temp file so readers never observe a
/// half-written file.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> io::Result<()> {
    let p = path.as_ref();
    crate::fs_op::helpers::atomic_write(p, contents)?;
    tracing::debug!("wrote {} bytes to {}", contents.len(), p.display());
    Ok(())
}
