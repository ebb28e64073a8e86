use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use crate::errors::{FixtureError, Result};

/// Content written to `.git/HEAD`; enough for git to treat the directory as
/// a repository on `master`.
pub const DEFAULT_HEAD_REF: &str = "ref: refs/heads/master";

/// Tunables for a fixture tree. Every field has a default, so an empty TOML
/// document yields the standard layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    /// Root scoping every path. `None` leaves the structure unconfigured.
    pub root: Option<PathBuf>,
    /// Working directory name below the root. Must stay below it.
    pub working_dir: String,
    /// Fixture assets directory name below the root.
    pub fixtures_dir: String,
    /// Literal content of `.git/HEAD`.
    pub head_ref: String,
    /// Config extension installed when none is given.
    pub default_config_extension: String,
    /// Mode applied recursively after the scripts preset is installed.
    pub script_mode: u32,
}

impl Default for FixtureSettings {
    fn default() -> Self {
        Self {
            root: None,
            working_dir: "tmp".to_string(),
            fixtures_dir: "fixtures".to_string(),
            head_ref: DEFAULT_HEAD_REF.to_string(),
            default_config_extension: "yml".to_string(),
            script_mode: 0o777,
        }
    }
}

impl FixtureSettings {
    /// Parse settings from a TOML string.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load settings from a TOML file. A relative `root` is resolved against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut settings = Self::from_toml_str(&text).map_err(|e| FixtureError::Settings {
            path: path.to_path_buf(),
            msg: e.to_string(),
        })?;
        settings.validate()?;
        if let (Some(root), Some(base)) = (settings.root.as_ref(), path.parent()) {
            if root.is_relative() {
                settings.root = Some(base.join(root));
            }
        }
        tracing::debug!("loaded fixture settings from {}", path.display());
        Ok(settings)
    }

    /// Reject directory names that would resolve outside the root.
    pub fn validate(&self) -> Result<()> {
        check_dir_name("working_dir", &self.working_dir)?;
        check_dir_name("fixtures_dir", &self.fixtures_dir)
    }
}

fn check_dir_name(field: &'static str, value: &str) -> Result<()> {
    let p = Path::new(value);
    let plain = p.components().next().is_some()
        && p.components().all(|c| matches!(c, Component::Normal(_)));
    if plain {
        Ok(())
    } else {
        Err(FixtureError::UnsafeDirName {
            field,
            value: value.to_string(),
        })
    }
}
