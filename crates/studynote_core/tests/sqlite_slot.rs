use std::path::Path;
use studynote_core::db::open_db;
use studynote_core::{NoteStore, PersistenceSlot, SqliteSlot, SubmitOutcome, NOTES_STORAGE_KEY};

fn open_store(path: &Path) -> NoteStore<SqliteSlot> {
    let conn = open_db(path).expect("notes db should open");
    NoteStore::hydrate(SqliteSlot::new(conn))
}

fn create(store: &mut NoteStore<SqliteSlot>, text: &str) -> i64 {
    store.set_draft(text);
    match store.submit_draft().expect("submit should persist") {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn notes_survive_reopening_the_database() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("studynote.sqlite3");

    let (kept, edited) = {
        let mut store = open_store(&path);
        let kept = create(&mut store, "read chapter 3");
        let edited = create(&mut store, "flashcards");
        store.begin_edit(edited);
        store.set_draft("flashcards: biology");
        store.submit_draft().expect("update should persist");
        (kept, edited)
    };

    let store = open_store(&path);
    let pairs: Vec<_> = store
        .notes()
        .iter()
        .map(|note| (note.id, note.text.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![(edited, "flashcards: biology"), (kept, "read chapter 3")]
    );
}

#[test]
fn persisted_value_uses_plain_id_text_objects() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let mut store = open_store(&dir.path().join("studynote.sqlite3"));
    let id = create(&mut store, "  spaced out  ");

    let raw = store
        .slot()
        .get(NOTES_STORAGE_KEY)
        .expect("slot read should succeed")
        .expect("notes should have been written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("slot value should be JSON");
    assert_eq!(value, serde_json::json!([{ "id": id, "text": "spaced out" }]));
}

#[test]
fn corrupt_row_is_recovered_and_overwritten_on_next_write() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("studynote.sqlite3");
    {
        let conn = open_db(&path).expect("notes db should open");
        let mut slot = SqliteSlot::new(conn);
        slot.set(NOTES_STORAGE_KEY, "[{\"id\": 1, \"text\": ")
            .expect("raw write should succeed");
    }

    let mut store = open_store(&path);
    assert!(store.notes().is_empty());
    create(&mut store, "fresh start");
    drop(store);

    let reopened = open_store(&path);
    assert_eq!(reopened.notes().len(), 1);
    assert_eq!(reopened.notes()[0].text, "fresh start");
}
