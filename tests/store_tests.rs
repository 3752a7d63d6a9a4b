//! Library-level tests for the durable record store and the DPR log.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use sitelogger::core::dpr::{DPR_LIST, DprLog};
use sitelogger::errors::AppError;
use sitelogger::store::LocalRecordStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    text: String,
    priority: i32,
}

fn test_store(name: &str) -> LocalRecordStore {
    let mut path = std::env::temp_dir();
    path.push(format!("{}_sitelogger_store.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    LocalRecordStore::open(&db_path).unwrap()
}

#[test]
fn get_absent_key_is_none_not_error() {
    let store = test_store("absent");
    let got: Option<String> = store.get("nothing.here").unwrap();
    assert!(got.is_none());
}

#[test]
fn put_overwrites_and_survives_reopen() {
    let mut path = std::env::temp_dir();
    path.push("reopen_sitelogger_store.sqlite");
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();

    {
        let mut store = LocalRecordStore::open(&db_path).unwrap();
        store.put("site.name", &"Tower A".to_string()).unwrap();
        store.put("site.name", &"Tower B".to_string()).unwrap();
    }

    // Process-restart semantics: a fresh connection sees the last write.
    let store = LocalRecordStore::open(&db_path).unwrap();
    let got: Option<String> = store.get("site.name").unwrap();
    assert_eq!(got.as_deref(), Some("Tower B"));
}

#[test]
fn remove_and_clear_only_touch_keys() {
    let mut store = test_store("clear");

    store.put("a", &1_i64).unwrap();
    store.put("b", &2_i64).unwrap();
    store
        .append_to_list(
            "notes",
            &Note {
                text: "rebar delivered".to_string(),
                priority: 1,
            },
        )
        .unwrap();

    store.remove("a").unwrap();
    assert!(store.get::<i64>("a").unwrap().is_none());
    assert_eq!(store.get::<i64>("b").unwrap(), Some(2));

    store.clear().unwrap();
    assert!(store.get::<i64>("b").unwrap().is_none());

    // Clearing the key/value namespace must never erase list history.
    let notes: Vec<Note> = store.read_list("notes").unwrap();
    assert_eq!(notes.len(), 1);
}

#[test]
fn appends_keep_order_and_dense_positions() {
    let mut store = test_store("append_order");

    for i in 0..5 {
        let pos = store
            .append_to_list(
                "notes",
                &Note {
                    text: format!("note {}", i),
                    priority: i,
                },
            )
            .unwrap();
        assert_eq!(pos, i as i64);
    }

    let notes: Vec<Note> = store.read_list("notes").unwrap();
    assert_eq!(notes.len(), 5);
    for (i, n) in notes.iter().enumerate() {
        assert_eq!(n.text, format!("note {}", i));
    }
}

#[test]
fn lists_are_independent() {
    let mut store = test_store("two_lists");

    let p0 = store
        .append_to_list(
            "alpha",
            &Note {
                text: "a".to_string(),
                priority: 0,
            },
        )
        .unwrap();
    let q0 = store
        .append_to_list(
            "beta",
            &Note {
                text: "b".to_string(),
                priority: 0,
            },
        )
        .unwrap();

    // Each list has its own position sequence.
    assert_eq!(p0, 0);
    assert_eq!(q0, 0);

    assert_eq!(store.read_list::<Note>("alpha").unwrap().len(), 1);
    assert_eq!(store.read_list::<Note>("beta").unwrap().len(), 1);
}

#[test]
fn dpr_append_produces_distinct_ids_in_order() {
    let store = test_store("dpr_ids");
    let mut log = DprLog::new(store);

    let descriptions = [
        "Poured foundation slab",
        "Erected column formwork",
        "Cured slab, removed shuttering",
    ];

    for d in &descriptions {
        let entry = log.append(d, "", None).unwrap();
        assert!(!entry.id.is_empty());
        assert_eq!(entry.work_description, *d);
    }

    let all = log.list_all().unwrap();
    assert_eq!(all.len(), descriptions.len());

    let ids: HashSet<&str> = all.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), descriptions.len());

    for (entry, expected) in all.iter().zip(descriptions.iter()) {
        assert_eq!(entry.work_description, *expected);
    }
}

#[test]
fn dpr_rejects_blank_description() {
    let store = test_store("dpr_blank");
    let mut log = DprLog::new(store);

    assert!(matches!(
        log.append("   ", "", None),
        Err(AppError::EmptyDescription)
    ));
    assert!(log.list_all().unwrap().is_empty());
}

#[test]
fn dpr_entries_are_stored_under_their_own_list() {
    let store = test_store("dpr_list_name");
    let mut log = DprLog::new(store);

    log.append("Laid brickwork on level 2", "north face", Some("wall.jpg".to_string()))
        .unwrap();

    let raw: Vec<sitelogger::models::dpr::DprEntry> =
        log.store_mut().read_list(DPR_LIST).unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].remarks, "north face");
    assert_eq!(raw[0].photo_ref.as_deref(), Some("wall.jpg"));
}
