use notekeep_core::{Store, StoreError};
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

#[fixture]
fn store() -> (TempDir, Store) {
    let tmp = TempDir::new().unwrap();
    let store = Store::open(tmp.path()).unwrap();
    (tmp, store)
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[rstest]
fn move_into_folder(store: (TempDir, Store)) {
    let (tmp, store) = store;

    store.add_note("Task", "Do the thing", &tags(&["work"]), None).unwrap();
    let new_rel = store.move_note("task.md", Some("archive")).unwrap();

    assert_eq!(new_rel, "archive/task.md");
    assert!(!tmp.path().join("task.md").exists());

    let body = store.get_note("archive/task.md").unwrap().unwrap();
    assert_eq!(body, "# Task\nTags: work\n\nDo the thing");

    // Entry migrated from the root index to the destination index.
    assert!(store.list_notes(None).unwrap().is_empty());
    let archived = store.list_notes(Some("archive")).unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].filename, "archive/task.md");
    assert_eq!(archived[0].tags, tags(&["work"]));
}

#[rstest]
fn move_to_current_location_is_a_no_op(store: (TempDir, Store)) {
    let (tmp, store) = store;

    store.add_note("Task", "content", &[], None).unwrap();
    let before = fs::metadata(tmp.path().join("task.md")).unwrap().modified().unwrap();

    let rel = store.move_note("task.md", None).unwrap();
    assert_eq!(rel, "task.md");

    let after = fs::metadata(tmp.path().join("task.md")).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[rstest]
fn move_back_to_root(store: (TempDir, Store)) {
    let (tmp, store) = store;

    store.add_note("Task", "content", &[], Some("archive")).unwrap();
    let rel = store.move_note("archive/task.md", None).unwrap();

    assert_eq!(rel, "task.md");
    assert!(tmp.path().join("task.md").exists());
    assert!(!tmp.path().join("archive").exists());
}

#[rstest]
fn move_target_accepts_md_suffix(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Box", "", &[], None).unwrap();
    store.add_note("Task", "content", &[], None).unwrap();

    let rel = store.move_note("task.md", Some("box.md")).unwrap();
    assert_eq!(rel, "box/task.md");
}

#[rstest]
fn move_missing_note_is_not_found(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    let err = store.move_note("non_existent.md", Some("archive")).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[rstest]
fn move_resolves_destination_collisions(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Task", "already here", &[], Some("archive")).unwrap();
    store.add_note("Task", "moving in", &[], None).unwrap();

    let rel = store.move_note("task.md", Some("archive")).unwrap();
    assert_eq!(rel, "archive/task_1.md");

    let body = store.get_note("archive/task_1.md").unwrap().unwrap();
    assert!(body.ends_with("moving in"));
}

#[rstest]
fn move_rewrites_references(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Task", "the task", &[], None).unwrap();
    store.add_note("Overview", "see task.md for details", &[], None).unwrap();

    store.move_note("task.md", Some("archive")).unwrap();

    let body = store.get_note("overview.md").unwrap().unwrap();
    assert_eq!(body, "# Overview\nTags: \n\nsee archive/task.md for details");
}

#[rstest]
fn move_rewrites_references_in_subdirectories(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Task", "the task", &[], None).unwrap();
    store.add_note("Journal", "", &[], None).unwrap();
    store.add_note("Entry", "follow-up on task.md soon", &[], Some("journal")).unwrap();

    store.move_note("task.md", Some("archive")).unwrap();

    let body = store.get_note("journal/entry.md").unwrap().unwrap();
    assert!(body.contains("archive/task.md"));
}

#[rstest]
fn move_updates_ancestor_counts_and_prunes_source(store: (TempDir, Store)) {
    let (tmp, store) = store;

    store.add_note("Box", "", &[], None).unwrap();
    store.add_note("Item", "contents", &[], Some("box")).unwrap();

    let top = store.list_notes(None).unwrap();
    let boxed = top.iter().find(|n| n.title == "Box").unwrap();
    assert_eq!(boxed.children_count, Some(1));

    let rel = store.move_note("box/item.md", None).unwrap();
    assert_eq!(rel, "item.md");

    let top = store.list_notes(None).unwrap();
    let boxed = top.iter().find(|n| n.title == "Box").unwrap();
    assert_eq!(boxed.children_count, None);
    assert_eq!(boxed.descendant_count, None);
    assert!(!tmp.path().join("box").exists());
}

#[rstest]
fn move_into_nested_folder_updates_counts(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Projects", "", &[], None).unwrap();
    store.add_note("Task", "content", &[], None).unwrap();

    store.move_note("task.md", Some("projects")).unwrap();

    let top = store.list_notes(None).unwrap();
    let projects = top.iter().find(|n| n.title == "Projects").unwrap();
    assert_eq!(projects.children_count, Some(1));
    assert_eq!(projects.descendant_count, Some(1));
}
