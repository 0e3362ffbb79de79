//! End-to-end store behavior through the public API: bootstrap a file-backed
//! store, save and replace records, reopen and read them back.

use persistkit::{bootstrap, open_at, Database, Error, FixedDirProvider, Record, RecordList};
use tempfile::TempDir;

fn fresh_store() -> (Database, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = bootstrap(&FixedDirProvider(dir.path().to_path_buf())).unwrap();
    (db, dir)
}

// ============================================
// Scenario
// ============================================

#[test]
fn test_save_replace_and_reload() {
    let (db, dir) = fresh_store();

    db.save(&Record::new("a", "note", 1, vec![0x01, 0x02])).unwrap();
    let loaded = db.load_by_identifier("a").unwrap().unwrap();
    assert_eq!(loaded, Record::new("a", "note", 1, vec![0x01, 0x02]));

    db.save(&Record::new("a", "task", 2, Vec::new())).unwrap();
    let all = db.load_all().unwrap();
    assert_eq!(all, vec![Record::new("a", "task", 2, Vec::new())]);

    // Same contents after reopening the file
    let path = db.path().unwrap().to_path_buf();
    db.close().unwrap();
    let reopened = open_at(&path).unwrap();
    assert_eq!(reopened.load_all().unwrap(), all);
    drop(dir);
}

#[test]
fn test_fresh_store_is_empty() {
    let (db, _dir) = fresh_store();

    assert!(db.load_all().unwrap().is_empty());
    for id in ["a", "missing", "ünïcødé", "with space"] {
        assert!(db.load_by_identifier(id).unwrap().is_none());
    }
}

#[test]
fn test_loaded_record_is_detached() {
    let (db, _dir) = fresh_store();
    db.save(&Record::new("a", "note", 1, b"one".to_vec())).unwrap();

    let mut loaded = db.load_by_identifier("a").unwrap().unwrap();
    loaded.kind = "changed".to_string();
    loaded.content.push(b'!');

    let stored = db.load_by_identifier("a").unwrap().unwrap();
    assert_eq!(stored.kind, "note");
    assert_eq!(stored.content, b"one");

    db.save(&loaded).unwrap();
    assert_eq!(db.load_by_identifier("a").unwrap().unwrap(), loaded);
}

#[test]
fn test_invalid_identifier_is_bind_failure() {
    let (db, _dir) = fresh_store();
    let existing = Record::new("a", "note", 1, vec![0x01, 0x02]);
    db.save(&existing).unwrap();
    let before = db.load_all().unwrap();

    let result = db.save(&Record::new("a\0", "task", 2, vec![0xff]));
    assert!(matches!(result, Err(Error::Bind { index: 1, .. })));

    let result = db.save(&Record::new("", "task", 2, vec![0xff]));
    assert!(matches!(result, Err(Error::Bind { index: 1, .. })));

    assert_eq!(db.load_all().unwrap(), before);
    assert_eq!(db.load_by_identifier("a").unwrap().unwrap(), existing);
}

// ============================================
// Record list
// ============================================

#[test]
fn test_record_list_tracks_store() {
    let (db, _dir) = fresh_store();
    let mut list = RecordList::load(&db).unwrap();

    for (i, kind) in ["note", "task", "note"].iter().enumerate() {
        list.add(&Record::new(format!("r{}", i), *kind, i as u32, vec![i as u8])).unwrap();
    }

    assert_eq!(list.len(), 3);
    assert_eq!(list.records().len(), db.load_all().unwrap().len());
}

#[test]
fn test_store_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let (db, _dir) = fresh_store();
    let db = Arc::new(Mutex::new(db));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let db = Arc::clone(&db);
            thread::spawn(move || {
                for i in 0..10 {
                    let record = Record::new(format!("t{}-{}", t, i), "note", i, Vec::new());
                    db.lock().unwrap().save(&record).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(db.lock().unwrap().load_all().unwrap().len(), 40);
}
