use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Resolve the destination path for copying `src` into `dst_dir`, keeping the
/// source file name. Fails with `InvalidInput` if `src` has no file name.
pub fn resolve_target(dst_dir: &Path, src: &Path) -> io::Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source path has no file name: {}", src.display()),
        )
    })?;
    Ok(dst_dir.join(name))
}

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place. An existing `target` is
/// replaced.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let Some(dir) = target.parent() else {
        return fs::write(target, data);
    };
    fs::create_dir_all(dir)?;

    static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);
    let seq = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    let tmp = dir.join(format!(".tmp_atomic_write.{:x}.{:x}", std::process::id(), seq));

    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, target).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

/// Convert an `fs_extra` error into `io::Error`, unwrapping the inner IO
/// error when there is one so callers see the original kind.
pub fn into_io(e: fs_extra::error::Error) -> io::Error {
    let msg = e.to_string();
    match e.kind {
        fs_extra::error::ErrorKind::Io(inner) => inner,
        fs_extra::error::ErrorKind::NotFound => io::Error::new(io::ErrorKind::NotFound, msg),
        fs_extra::error::ErrorKind::PermissionDenied => {
            io::Error::new(io::ErrorKind::PermissionDenied, msg)
        }
        fs_extra::error::ErrorKind::AlreadyExists => {
            io::Error::new(io::ErrorKind::AlreadyExists, msg)
        }
        _ => io::Error::other(msg),
    }
}
