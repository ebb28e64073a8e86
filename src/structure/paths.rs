use std::path::PathBuf;

/// Base name shared by every fixture config document (`lefthook.<ext>`).
pub const CONFIG_STEM: &str = "lefthook";
/// Script that always exits successfully.
pub const OK_SCRIPT: &str = "ok_script";
/// Script that always exits with failure.
pub const FAIL_SCRIPT: &str = "fail_script";
pub const PRE_COMMIT_HOOK: &str = "pre-commit";
pub const PRE_PUSH_HOOK: &str = "pre-push";

/// Locations of the read-only fixture assets. Pure path composition; nothing
/// here touches the filesystem except `config_extensions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    dir: PathBuf,
}

impl FixturePaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn config_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", CONFIG_STEM, extension))
    }

    pub fn ok_script_path(&self) -> PathBuf {
        self.dir.join(OK_SCRIPT)
    }

    pub fn fail_script_path(&self) -> PathBuf {
        self.dir.join(FAIL_SCRIPT)
    }

    pub fn pre_commit_hook_path(&self) -> PathBuf {
        self.dir.join(PRE_COMMIT_HOOK)
    }

    pub fn pre_push_hook_path(&self) -> PathBuf {
        self.dir.join(PRE_PUSH_HOOK)
    }

    /// Extensions of the `lefthook.*` documents present in the fixtures
    /// directory, sorted. Missing directory yields an empty list.
    pub fn config_extensions(&self) -> std::io::Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let prefix = format!("{}.", CONFIG_STEM);
        let mut exts = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(ext) = name.to_str().and_then(|n| n.strip_prefix(&prefix)) {
                if !ext.is_empty() {
                    exts.push(ext.to_string());
                }
            }
        }
        exts.sort();
        Ok(exts)
    }
}
