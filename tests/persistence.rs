//! Durability across restarts: a second store instance pointed at the same
//! directory must see exactly what the first one persisted.

use jotfile::codec::{AggregateCodec, DelimitedPairs, JsonList, JsonRecord, PlainText};
use jotfile::config::StorageKind;
use jotfile::store::{open_store, DirStore, FileStore, NoteStore, NOTES_FILE_NAME};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_aggregate_json_restart_scenario() {
    let dir = TempDir::new().unwrap();
    let notes_file = dir.path().join(NOTES_FILE_NAME);

    // Fresh directory: the aggregate file is created empty.
    let mut store = FileStore::open(dir.path(), JsonList).unwrap();
    assert!(notes_file.exists());
    assert_eq!(fs::read_to_string(&notes_file).unwrap(), "");

    let id = store.create_with_content("hello").unwrap();

    // The file decodes to exactly one note.
    let decoded = JsonList
        .decode(&fs::read_to_string(&notes_file).unwrap())
        .unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].content(), "hello");

    // Restart: a new instance on the same directory serves the note.
    drop(store);
    let reopened = FileStore::open(dir.path(), JsonList).unwrap();
    let all = reopened.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), id);
    assert_eq!(all[0].content(), "hello");
}

#[test]
fn test_aggregate_pairs_restart_scenario() {
    let dir = TempDir::new().unwrap();

    let mut store = FileStore::open(dir.path(), DelimitedPairs).unwrap();
    let id = store.create_with_content("pairs survive too").unwrap();
    store.create_with_content("").unwrap();
    drop(store);

    let reopened = FileStore::open(dir.path(), DelimitedPairs).unwrap();
    assert_eq!(reopened.count(), 2);
    assert_eq!(reopened.get(&id).unwrap().content(), "pairs survive too");
}

#[test]
fn test_no_backup_file_in_steady_state() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path(), JsonList).unwrap();

    for i in 0..5 {
        store.create_with_content(&format!("note {i}")).unwrap();
    }
    store.delete_all();
    store.create_with_content("last").unwrap();

    let leftovers: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".bak"))
        .collect();
    assert!(leftovers.is_empty(), "stale backups: {leftovers:?}");
}

#[test]
fn test_per_record_restart_sees_all_files() {
    let dir = TempDir::new().unwrap();

    let mut store = DirStore::open(dir.path(), JsonRecord, ".txt");
    let a = store.create_with_content("alpha").unwrap();
    let b = store.create_with_content("beta").unwrap();
    drop(store);

    let reopened = DirStore::open(dir.path(), JsonRecord, ".txt");
    assert_eq!(reopened.count(), 2);
    assert_eq!(reopened.get(&a).unwrap().content(), "alpha");
    assert_eq!(reopened.get(&b).unwrap().content(), "beta");
}

#[test]
fn test_per_record_plain_text_interoperates_with_hand_written_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("grocery-list.txt"), "eggs and milk").unwrap();

    let store = DirStore::open(dir.path(), PlainText, ".txt");
    let note = store.get("grocery-list").unwrap();
    assert_eq!(note.content(), "eggs and milk");
}

#[test]
fn test_factory_round_trip_through_storage_kinds() {
    for kind in [
        StorageKind::TextDir,
        StorageKind::JsonDir,
        StorageKind::JsonFile,
        StorageKind::PairsFile,
    ] {
        let dir = TempDir::new().unwrap();

        let mut store = open_store(kind, dir.path(), ".txt").unwrap();
        let id = store.create_with_content("durable").unwrap();
        drop(store);

        let reopened = open_store(kind, dir.path(), ".txt").unwrap();
        assert_eq!(reopened.count(), 1, "{kind}");
        assert_eq!(reopened.get(&id).unwrap().content(), "durable", "{kind}");
    }
}

#[test]
fn test_memory_kind_does_not_persist() {
    let dir = TempDir::new().unwrap();

    let mut store = open_store(StorageKind::Memory, dir.path(), ".txt").unwrap();
    store.create_with_content("ephemeral").unwrap();
    drop(store);

    let reopened = open_store(StorageKind::Memory, dir.path(), ".txt").unwrap();
    assert_eq!(reopened.count(), 0);
    // And nothing was written to the directory either.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
