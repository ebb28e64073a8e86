use std::io;
use std::path::{Path, PathBuf};

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::fs_op::helpers::{into_io, resolve_target};

/// Copy the file `src` into the directory `dst_dir`, keeping its file name.
///
/// An existing file with the same name is overwritten. Permission bits
/// follow the source. Returns the path of the copy.
pub fn copy_into(src: &Path, dst_dir: &Path) -> io::Result<PathBuf> {
    let target = resolve_target(dst_dir, src)?;

    let mut options = CopyOptions::new();
    options.overwrite = true;
    // Use a 64 KiB buffer for file copies to balance throughput and memory.
    options.buffer_size = 64 * 1024;
    let n = fs_extra_copy(src, &target, &options).map_err(into_io)?;

    crate::fs_op::metadata::copy_permissions(src, &target)?;
    tracing::debug!("copied {} ({} bytes) to {}", src.display(), n, target.display());
    Ok(target)
}

/// Copy every file in `sources` into `dst_dir`. Stops at the first failure.
pub fn copy_all_into(sources: &[&Path], dst_dir: &Path) -> io::Result<Vec<PathBuf>> {
    sources.iter().map(|src| copy_into(src, dst_dir)).collect()
}
