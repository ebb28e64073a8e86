#![allow(dead_code)]

use std::path::Path;

use assert_fs::prelude::*;
use assert_fs::TempDir;

use lefthook_fixture::FileStructure;

/// A temp root holding a copy of `tests/fixtures` under `fixtures/`.
pub fn fixture_root() -> TempDir {
    let temp = TempDir::new().expect("temp root");
    let fixtures = temp.child("fixtures");
    fixtures.create_dir_all().expect("fixtures dir");
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    fixtures.copy_from(&src, &["*"]).expect("copy fixtures");
    temp
}

pub fn structure_at(root: &Path) -> FileStructure {
    let mut structure = FileStructure::new();
    structure.configure(root).expect("configure root");
    structure
}
