mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

use common::fixture_root;

#[test]
fn setup_then_status_then_clean() {
    let root = fixture_root();

    cargo_bin_cmd!("fixture-tree")
        .arg("--root")
        .arg(root.path())
        .arg("setup")
        .assert()
        .success();

    root.child("tmp/.git/HEAD").assert("ref: refs/heads/master");
    root.child("tmp/lefthook.yml").assert(predicate::path::is_file());

    cargo_bin_cmd!("fixture-tree")
        .arg("--root")
        .arg(root.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::diff("config-ready\n"));

    cargo_bin_cmd!("fixture-tree")
        .arg("--root")
        .arg(root.path())
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("removed "));

    root.child("tmp").assert(predicate::path::missing());
}

#[test]
fn tree_lists_installed_config() {
    let root = fixture_root();

    cargo_bin_cmd!("fixture-tree")
        .args(["config", "--ext", "toml", "--root"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("lefthook.toml"));

    cargo_bin_cmd!("fixture-tree")
        .arg("--root")
        .arg(root.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::diff("lefthook.toml\n"));
}

#[test]
fn missing_root_fails() {
    cargo_bin_cmd!("fixture-tree")
        .arg("git")
        .assert()
        .failure()
        .stderr(predicate::str::contains("root not set"));
}

#[test]
fn unknown_extension_fails() {
    let root = fixture_root();

    cargo_bin_cmd!("fixture-tree")
        .arg("--root")
        .arg(root.path())
        .args(["config", "--ext", "unknown_ext"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fixture not found"));

    root.child("tmp").assert(predicate::path::missing());
}

#[test]
fn settings_file_supplies_root_and_names() {
    let root = fixture_root();
    let settings = root.child("fixture.toml");
    settings
        .write_str("root = \".\"\nworking_dir = \"work\"\n")
        .unwrap();

    cargo_bin_cmd!("fixture-tree")
        .arg("--settings")
        .arg(settings.path())
        .arg("git")
        .assert()
        .success();

    root.child("work/.git/HEAD").assert("ref: refs/heads/master");
    root.child("tmp").assert(predicate::path::missing());
}
