use std::path::Path;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory.
    Other,
}

impl PathType {
    /// Classify `path`, following symlinks.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::metadata(path.as_ref()) {
            Err(_) => PathType::NotFound,
            Ok(m) if m.is_dir() => PathType::Directory,
            Ok(m) if m.is_file() => PathType::File,
            Ok(_) => PathType::Other,
        }
    }
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
