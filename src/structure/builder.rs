use std::cell::OnceCell;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{FixtureError, Result};
use crate::fs_op::{self, stat::{is_dir, is_file}, Removed};
use crate::structure::manifest::manifest;
use crate::structure::paths::{FixturePaths, PRE_COMMIT_HOOK, PRE_PUSH_HOOK};
use crate::structure::settings::FixtureSettings;
use crate::structure::stage::{Stage, GIT_DIR, GIT_SUBDIRS, SCRIPTS_DIR};

/// Builds and tears down a fake project directory under a configured root.
///
/// The working directory (`<root>/<working_dir>`, `tmp` by default) is
/// derived on first use and then stays fixed: `configure` with a different
/// root fails with [`FixtureError::RootLocked`] until [`FileStructure::reset`]
/// is called.
///
/// Setup operations are independent. The conventional order is
/// [`have_git`](Self::have_git), [`make_scripts_preset`](Self::make_scripts_preset),
/// [`make_config`](Self::make_config); [`setup`](Self::setup) runs all three.
#[derive(Debug, Default)]
pub struct FileStructure {
    settings: FixtureSettings,
    root: Option<PathBuf>,
    tmp: OnceCell<PathBuf>,
}

impl FileStructure {
    /// An unconfigured structure with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from settings. A `root` in the settings configures the
    /// structure immediately. Directory names that would resolve outside
    /// the root are rejected.
    pub fn with_settings(settings: FixtureSettings) -> Result<Self> {
        settings.validate()?;
        let root = settings.root.clone();
        Ok(Self {
            settings,
            root,
            tmp: OnceCell::new(),
        })
    }

    /// Set the root scoping every later operation.
    ///
    /// Before the working directory has been derived the root may be
    /// replaced freely. Afterwards the same root is accepted as a no-op and a
    /// different one is rejected.
    pub fn configure(&mut self, root: impl Into<PathBuf>) -> Result<()> {
        let requested = root.into();
        if let Some(current) = self.tmp.get().and(self.root.as_ref()) {
            if *current == requested {
                return Ok(());
            }
            return Err(FixtureError::RootLocked {
                current: current.clone(),
                requested,
            });
        }
        debug!("fixture root set to {}", requested.display());
        self.root = Some(requested);
        Ok(())
    }

    /// Forget the root and the memoized working directory. Nothing on disk
    /// is touched.
    pub fn reset(&mut self) {
        self.root = None;
        self.tmp = OnceCell::new();
        debug!("fixture root reset");
    }

    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or(FixtureError::RootNotSet)
    }

    /// The working directory, derived once from the root.
    pub fn tmp(&self) -> Result<&Path> {
        if let Some(p) = self.tmp.get() {
            return Ok(p);
        }
        let path = self.root()?.join(&self.settings.working_dir);
        Ok(self.tmp.get_or_init(|| path))
    }

    /// Accessors for the read-only fixture assets.
    pub fn fixtures(&self) -> Result<FixturePaths> {
        Ok(FixturePaths::new(self.root()?.join(&self.settings.fixtures_dir)))
    }

    pub fn config_path(&self, extension: &str) -> Result<PathBuf> {
        Ok(self.fixtures()?.config_path(extension))
    }

    pub fn ok_script_path(&self) -> Result<PathBuf> {
        Ok(self.fixtures()?.ok_script_path())
    }

    pub fn fail_script_path(&self) -> Result<PathBuf> {
        Ok(self.fixtures()?.fail_script_path())
    }

    pub fn pre_commit_hook_path(&self) -> Result<PathBuf> {
        Ok(self.fixtures()?.pre_commit_hook_path())
    }

    pub fn pre_push_hook_path(&self) -> Result<PathBuf> {
        Ok(self.fixtures()?.pre_push_hook_path())
    }

    /// Create `.git/{hooks,objects,refs}` and write `.git/HEAD`. Safe to
    /// repeat; HEAD is rewritten each time.
    pub fn have_git(&self) -> Result<()> {
        let git = self.tmp()?.join(GIT_DIR);
        for sub in GIT_SUBDIRS {
            fs_op::create_dir_all(git.join(sub))?;
        }
        // git needs HEAD, objects and refs to resolve the .git directory.
        fs_op::write_file(git.join("HEAD"), self.settings.head_ref.as_bytes())?;
        info!("repository marker ready at {}", git.display());
        Ok(())
    }

    /// Install the success/failure scripts into `.lefthook/pre-commit`, the
    /// success script into `.lefthook/pre-push`, and the pre-push hook into
    /// `.git/hooks`, then open up permissions on the whole working directory.
    ///
    /// All fixture sources and the `.git/hooks` directory (see
    /// [`have_git`](Self::have_git)) are checked before anything is written.
    /// A missing hooks directory fails with a `NotFound` IO error.
    pub fn make_scripts_preset(&self) -> Result<()> {
        let tmp = self.tmp()?;
        let fixtures = self.fixtures()?;
        let ok = fixtures.ok_script_path();
        let fail = fixtures.fail_script_path();
        let pre_push_hook = fixtures.pre_push_hook_path();
        for src in [&ok, &fail, &pre_push_hook] {
            require_fixture(src)?;
        }
        let hooks_dir = tmp.join(GIT_DIR).join("hooks");
        if !is_dir(&hooks_dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("hooks directory missing: {}", hooks_dir.display()),
            )
            .into());
        }

        let scripts = tmp.join(SCRIPTS_DIR);
        let pre_commit_dir = scripts.join(PRE_COMMIT_HOOK);
        let pre_push_dir = scripts.join(PRE_PUSH_HOOK);

        fs_op::create_dir_all(&pre_commit_dir)?;
        fs_op::copy_all_into(&[ok.as_path(), fail.as_path()], &pre_commit_dir)?;

        fs_op::create_dir_all(&pre_push_dir)?;
        fs_op::copy_into(&ok, &pre_push_dir)?;

        fs_op::copy_into(&pre_push_hook, &hooks_dir)?;

        fs_op::set_mode_recursive(tmp, self.settings.script_mode)?;
        info!("scripts preset installed under {}", scripts.display());
        Ok(())
    }

    /// Copy `lefthook.<extension>` from the fixtures into the working
    /// directory, keeping its name. `None` uses the configured default
    /// extension (`yml`). A missing fixture fails before any mutation.
    pub fn make_config(&self, extension: Option<&str>) -> Result<PathBuf> {
        let ext = extension.unwrap_or(&self.settings.default_config_extension);
        let src = self.config_path(ext)?;
        require_fixture(&src)?;

        let tmp = self.tmp()?;
        fs_op::create_dir_all(tmp)?;
        let installed = fs_op::copy_into(&src, tmp)?;
        info!("config installed at {}", installed.display());
        Ok(installed)
    }

    /// Marker, preset and config in the conventional order.
    pub fn setup(&self, extension: Option<&str>) -> Result<()> {
        self.have_git()?;
        self.make_scripts_preset()?;
        self.make_config(extension)?;
        Ok(())
    }

    /// Remove the working directory recursively. An absent directory is a
    /// successful no-op. The memoized path is kept, so setup can follow.
    pub fn clean(&self) -> Result<Removed> {
        let tmp = self.tmp()?;
        let removed = fs_op::remove_path(tmp)?;
        match removed {
            Removed::Yes => info!("removed working directory {}", tmp.display()),
            Removed::Absent => warn!("nothing to clean at {}", tmp.display()),
        }
        Ok(removed)
    }

    /// Observed setup stage of the working directory.
    pub fn stage(&self) -> Result<Stage> {
        Ok(Stage::inspect(self.tmp()?))
    }

    /// Sorted relative listing of the working directory.
    pub fn manifest(&self) -> Result<Vec<String>> {
        Ok(manifest(self.tmp()?)?)
    }
}

fn require_fixture(path: &Path) -> Result<()> {
    if is_file(path) {
        Ok(())
    } else {
        Err(FixtureError::FixtureNotFound(path.to_path_buf()))
    }
}
