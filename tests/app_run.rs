use std::sync::Arc;

use clap::Parser;
use profiles::cli::Cli;
use profiles::config::AppPaths;
use profiles::{FileProfileStore, ProfileStore, SettingsProfile};

fn run(root: &std::path::Path, args: &[&str]) -> profiles::error::AppResult<()> {
    let mut argv = vec!["profiles", "--root", root.to_str().expect("utf-8 temp path")];
    argv.extend_from_slice(args);
    profiles::run(Cli::try_parse_from(argv).expect("cli parse should work"))
}

fn reopen(root: &std::path::Path, name: &str) -> SettingsProfile {
    let store: Arc<dyn ProfileStore> =
        Arc::new(FileProfileStore::new(AppPaths::at(root).expect("paths")));
    let mut profile = SettingsProfile::new(name, store);
    profile.load().expect("load");
    profile
}

#[test]
fn set_then_clear_persists_through_files() {
    let dir = tempfile::tempdir().expect("tempdir");

    run(
        dir.path(),
        &["--profile", " Work ", "set", "volume", "7", "--kind", "int"],
    )
    .expect("set int");
    run(dir.path(), &["--profile", "Work", "set", "theme", "dark"]).expect("set string");

    let profile = reopen(dir.path(), "Work");
    assert_eq!(profile.value().get_int("volume", 0), 7);
    assert_eq!(profile.value().get_string("theme", ""), "dark");

    run(dir.path(), &["--profile", "Work", "rm", "volume"]).expect("rm");
    assert!(!reopen(dir.path(), "Work").value().has_key("volume"));

    run(dir.path(), &["--profile", "Work", "clear"]).expect("clear");
    assert!(reopen(dir.path(), "Work").value().is_empty());
}

#[test]
fn get_missing_key_without_default_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    assert!(run(dir.path(), &["get", "absent"]).is_err());
    run(dir.path(), &["get", "absent", "--default", "x"]).expect("default should be used");
}

#[test]
fn read_only_commands_do_not_create_files() {
    let dir = tempfile::tempdir().expect("tempdir");

    run(dir.path(), &["show"]).expect("show");
    run(dir.path(), &["--json", "list"]).expect("list");
    run(dir.path(), &["has", "anything"]).expect("has");

    let store = FileProfileStore::new(AppPaths::at(dir.path()).expect("paths"));
    assert!(store.list().expect("list").is_empty());
}
