//! Filesystem primitives used to assemble fixture trees.
//!
//! Every helper returns `std::io::Result` so the underlying error reaches the
//! caller unchanged.

pub mod copy;
pub mod create;
pub mod helpers;
pub mod metadata;
pub mod remove;
pub mod stat;

pub use copy::{copy_all_into, copy_into};
pub use create::{create_dir_all, write_file};
pub use metadata::set_mode_recursive;
pub use remove::{remove_path, Removed};
pub use stat::PathType;
