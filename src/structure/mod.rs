//! Fake project tree for exercising a git hooks runner end to end.
//!
//! Layout produced under the working directory:
//!
//! ```text
//! .git/HEAD                    "ref: refs/heads/master"
//! .git/{hooks,objects,refs}/
//! .git/hooks/pre-push          copy of fixtures/pre-push
//! .lefthook/pre-commit/{ok_script,fail_script}
//! .lefthook/pre-push/ok_script
//! lefthook.<ext>               copy of fixtures/lefthook.<ext>
//! ```

pub mod builder;
pub mod manifest;
pub mod paths;
pub mod settings;
pub mod stage;

pub use builder::FileStructure;
pub use manifest::manifest;
pub use paths::FixturePaths;
pub use settings::{FixtureSettings, DEFAULT_HEAD_REF};
pub use stage::Stage;
