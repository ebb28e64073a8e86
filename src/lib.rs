pub mod errors;
pub mod fs_op;
pub mod structure;

pub use crate::errors::{FixtureError, Result};
pub use crate::fs_op::Removed;
pub use crate::structure::{FileStructure, FixturePaths, FixtureSettings, Stage};
