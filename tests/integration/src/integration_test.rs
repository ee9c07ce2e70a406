//! End-to-end tests across the workspace
//!
//! Exercises the full flow: locate the project root, bind a config file,
//! repair it, and persist derived data as JSON.

use cfgkit_fs::{ConfigStore, ProjectLayout, SaveOutcome, json};
use cfgkit_test_utils::project::ProjectFixture;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/main/config")
        .join(name)
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct DbSettings {
    host: String,
    port: String,
}

#[test]
fn test_bind_checked_in_fixture() {
    let project = ProjectFixture::new();
    project.copy_config(&fixture("app.ini"));
    let start = project.subdir("services/api");

    let store = ConfigStore::bind_from(&start, "app.ini").unwrap();

    assert_eq!(store.list_sections().unwrap(), vec!["server", "logging"]);
    assert_eq!(store.get_section("logging").unwrap()["level"], "info");
}

#[test]
fn test_repair_then_export_as_json() {
    let project = ProjectFixture::new();
    project.copy_config(&fixture("partial.ini"));
    let layout = ProjectLayout::detect(project.root()).unwrap();
    let mut store = ConfigStore::bind_in(&layout, "partial.ini").unwrap();

    let db = store
        .ensure_section("db", [("host", "localhost"), ("port", "5432")])
        .unwrap();
    assert_eq!(db["host"], "db.internal");
    assert_eq!(db["port"], "5432");
    project.assert_config_contains("partial.ini", "5432");

    let settings = DbSettings {
        host: db["host"].clone(),
        port: db["port"].clone(),
    };
    let export_dir = project.subdir("exports");
    let outcome = json::save_as(&settings, &export_dir, "db").unwrap();
    assert!(outcome.was_created());

    let loaded: DbSettings = json::load_as(outcome.path()).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_repeated_export_keeps_first_document() {
    let project = ProjectFixture::new();
    let export_dir = project.subdir("exports");

    let mut first = BTreeMap::new();
    first.insert("version", 1);
    json::save_as(&first, &export_dir, "state").unwrap();

    let mut second = BTreeMap::new();
    second.insert("version", 2);
    let outcome = json::save_as(&second, &export_dir, "state").unwrap();

    assert!(matches!(outcome, SaveOutcome::Skipped(_)));
    let loaded = json::load(export_dir.join("state.json")).unwrap();
    assert_eq!(loaded["version"], serde_json::json!(1));
}

#[test]
fn test_repairs_survive_rebinding() {
    let project = ProjectFixture::new();
    project.copy_config(&fixture("app.ini"));

    {
        let mut store = ConfigStore::bind_from(project.root(), "app.ini").unwrap();
        store
            .ensure_section("cache", [("ttl", "60"), ("backend", "memory")])
            .unwrap();
    }

    let mut store = ConfigStore::bind_from(project.root(), "app.ini").unwrap();
    assert_eq!(
        store.list_sections().unwrap(),
        vec!["server", "logging", "cache"]
    );
    let cache = store
        .ensure_section("cache", [("ttl", "999"), ("backend", "redis")])
        .unwrap();
    assert_eq!(cache["ttl"], "60");
    assert_eq!(cache["backend"], "memory");
}
