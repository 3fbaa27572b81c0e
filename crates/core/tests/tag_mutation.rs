use notekeep_core::Store;
use rstest::{fixture, rstest};
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
fn add_tags_unions_and_sorts(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Note", "content", &tags(&["a", "b"]), None).unwrap();
    assert!(store.add_tags("note.md", &tags(&["b", "c"])).unwrap());

    let body = store.get_note("note.md").unwrap().unwrap();
    assert_eq!(body, "# Note\nTags: a, b, c\n\ncontent");

    let listed = store.list_notes(None).unwrap();
    assert_eq!(listed[0].tags, tags(&["a", "b", "c"]));
}

#[rstest]
fn remove_tags_preserves_order(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Note", "content", &tags(&["c", "a", "b"]), None).unwrap();
    assert!(store.remove_tags("note.md", &tags(&["a"])).unwrap());

    let listed = store.list_notes(None).unwrap();
    assert_eq!(listed[0].tags, tags(&["c", "b"]));

    let body = store.get_note("note.md").unwrap().unwrap();
    assert_eq!(body, "# Note\nTags: c, b\n\ncontent");
}

#[rstest]
fn tag_symmetry_scenario(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Note", "x", &tags(&["a", "b"]), None).unwrap();
    store.add_tags("note.md", &tags(&["b", "c"])).unwrap();

    let listed = store.list_notes(None).unwrap();
    assert_eq!(listed[0].tags, tags(&["a", "b", "c"]));

    store.remove_tags("note.md", &tags(&["a"])).unwrap();
    let listed = store.list_notes(None).unwrap();
    assert_eq!(listed[0].tags, tags(&["b", "c"]));
}

#[rstest]
fn tag_mutation_keeps_multiline_content(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    let content = "first paragraph\n\nsecond paragraph\n- a list item";
    store.add_note("Note", content, &[], None).unwrap();
    store.add_tags("note.md", &tags(&["new"])).unwrap();

    let body = store.get_note("note.md").unwrap().unwrap();
    assert_eq!(body, format!("# Note\nTags: new\n\n{content}"));
}

#[rstest]
fn add_tags_on_missing_note_is_false(store: (TempDir, Store)) {
    let (_tmp, store) = store;
    assert!(!store.add_tags("nope.md", &tags(&["x"])).unwrap());
    assert!(!store.remove_tags("nope.md", &tags(&["x"])).unwrap());
}

#[rstest]
fn tags_work_on_nested_notes(store: (TempDir, Store)) {
    let (_tmp, store) = store;

    store.add_note("Parent Note", "", &[], None).unwrap();
    store.add_note("Child", "body", &tags(&["old"]), Some("parent_note")).unwrap();

    assert!(store.add_tags("parent_note/child.md", &tags(&["extra"])).unwrap());

    let children = store.list_notes(Some("parent_note")).unwrap();
    assert_eq!(children[0].tags, tags(&["extra", "old"]));
}
