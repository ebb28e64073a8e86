use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building or tearing down a fixture tree.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// An operation ran before `configure` supplied a root.
    #[error("fixture root not set; call `configure` before using the file structure")]
    RootNotSet,

    /// The working directory was already derived from another root.
    #[error("fixture root is locked to `{current}` (requested `{requested}`); call `reset` first")]
    RootLocked { current: PathBuf, requested: PathBuf },

    /// A fixture asset the caller asked for does not exist.
    #[error("fixture not found: `{0}`")]
    FixtureNotFound(PathBuf),

    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory name setting would leave the root (absolute, `..`, empty).
    #[error("`{field}` must be a plain relative name below the root, got `{value}`")]
    UnsafeDirName { field: &'static str, value: String },

    /// Settings file could not be read or parsed.
    #[error("invalid settings in `{path}`: {msg}")]
    Settings { path: PathBuf, msg: String },
}

pub type Result<T> = std::result::Result<T, FixtureError>;
