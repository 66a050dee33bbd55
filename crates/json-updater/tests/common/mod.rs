#![allow(dead_code)]

use std::path::PathBuf;

use json_updater::{FsStore, MemoryStore, Updater};
use serde_json::{json, Value};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("json_updater=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

pub const PACKAGE: &str = "package.json";

pub fn package_fixture() -> Value {
    json!({
        "name": "json-update",
        "version": "0.0.1",
        "license": "MIT",
        "author": {"name": "Hage Yaapa"},
        "tags": ["node"]
    })
}

pub fn pretty(doc: &Value) -> String {
    serde_json::to_string_pretty(doc).unwrap()
}

/// An updater over an in-memory copy of `doc`.
pub fn memory_updater(doc: &Value) -> Updater<MemoryStore> {
    let store = MemoryStore::new().with_document(PACKAGE, pretty(doc));
    Updater::new(store, PACKAGE)
}

/// Stored text of the updater's document.
pub async fn stored_text(updater: &Updater<MemoryStore>) -> String {
    updater.store().document(PACKAGE).await.unwrap()
}

pub async fn stored(updater: &Updater<MemoryStore>) -> Value {
    serde_json::from_str(&stored_text(updater).await).unwrap()
}

/// A temp dir holding `package.json` with `doc` as its content.
pub fn package_on_disk(doc: &Value) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(PACKAGE);
    std::fs::write(&path, pretty(doc)).unwrap();
    (dir, path)
}

pub fn read_on_disk(path: &PathBuf) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

pub fn fs_updater(path: &PathBuf) -> Updater<FsStore> {
    json_updater::open(path.clone())
}
