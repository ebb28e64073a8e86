use std::fmt;
use std::path::Path;

use crate::fs_op::stat::{is_dir, is_file, PathType};
use crate::structure::paths::{CONFIG_STEM, FAIL_SCRIPT, OK_SCRIPT, PRE_COMMIT_HOOK, PRE_PUSH_HOOK};

/// Name of the repository marker directory.
pub const GIT_DIR: &str = ".git";
/// Name of the hook-runner scripts directory.
pub const SCRIPTS_DIR: &str = ".lefthook";
/// Subdirectories of the marker tree.
pub const GIT_SUBDIRS: [&str; 3] = ["hooks", "objects", "refs"];

/// How far a working directory has been set up, as observed on disk.
///
/// Stages are cumulative: a tree is reported at the highest stage whose
/// predecessors are all present too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Working directory does not exist.
    Absent,
    /// Working directory exists without a complete marker tree.
    Empty,
    /// `.git/{hooks,objects,refs}` and `.git/HEAD` exist.
    MarkerReady,
    /// Scripts preset and the installed pre-push hook exist.
    PresetReady,
    /// A `lefthook.*` config sits at the working directory root.
    ConfigReady,
}

impl Stage {
    /// Inspect `tmp` and report its stage.
    pub fn inspect(tmp: &Path) -> Stage {
        if PathType::of(tmp) != PathType::Directory {
            return Stage::Absent;
        }
        if !marker_ready(tmp) {
            return Stage::Empty;
        }
        if !preset_ready(tmp) {
            return Stage::MarkerReady;
        }
        if !config_ready(tmp) {
            return Stage::PresetReady;
        }
        Stage::ConfigReady
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Absent => "absent",
            Stage::Empty => "empty",
            Stage::MarkerReady => "marker-ready",
            Stage::PresetReady => "preset-ready",
            Stage::ConfigReady => "config-ready",
        };
        f.write_str(s)
    }
}

fn marker_ready(tmp: &Path) -> bool {
    let git = tmp.join(GIT_DIR);
    GIT_SUBDIRS.iter().all(|d| is_dir(git.join(d))) && is_file(git.join("HEAD"))
}

fn preset_ready(tmp: &Path) -> bool {
    let scripts = tmp.join(SCRIPTS_DIR);
    let pre_commit = scripts.join(PRE_COMMIT_HOOK);
    let pre_push = scripts.join(PRE_PUSH_HOOK);
    is_file(pre_commit.join(OK_SCRIPT))
        && is_file(pre_commit.join(FAIL_SCRIPT))
        && is_file(pre_push.join(OK_SCRIPT))
        && is_file(tmp.join(GIT_DIR).join("hooks").join(PRE_PUSH_HOOK))
}

fn config_ready(tmp: &Path) -> bool {
    let prefix = format!("{}.", CONFIG_STEM);
    std::fs::read_dir(tmp)
        .map(|rd| {
            rd.filter_map(Result::ok).any(|e| {
                e.file_name().to_str().is_some_and(|n| n.starts_with(&prefix))
                    && e.file_type().map(|t| t.is_file()).unwrap_or(false)
            })
        })
        .unwrap_or(false)
}
