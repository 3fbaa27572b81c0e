//! Index data types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Sidecar index filename, one per directory.
pub const INDEX_FILE: &str = "notes_index.json";

/// One index record, keyed by note title in the containing map.
///
/// The count fields are present only when greater than zero; their absence
/// means "leaf note". On disk they use hyphenated keys, a naming divergence
/// from the listing projection that is preserved for compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Path relative to the store root, `/`-separated.
    pub filename: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of entries in this note's own child-directory index.
    #[serde(
        rename = "children-count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub children_count: Option<u64>,
    /// Total notes in the entire subtree rooted at this note's child directory.
    #[serde(
        rename = "descendant-count",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub descendant_count: Option<u64>,
}

impl IndexEntry {
    pub fn new(filename: String, tags: Vec<String>) -> Self {
        Self { filename, tags, children_count: None, descendant_count: None }
    }
}

/// A directory's index: title -> entry, insertion-ordered.
///
/// Titles are unique per directory; last write wins on collision. Insertion
/// order is part of the listing contract, hence `IndexMap`.
pub type NoteIndex = IndexMap<String, IndexEntry>;

/// Listing projection of an index entry, with underscored field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInfo {
    pub filename: String,
    pub title: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descendant_count: Option<u64>,
}

impl NoteInfo {
    pub fn from_entry(title: &str, entry: &IndexEntry) -> Self {
        Self {
            filename: entry.filename.clone(),
            title: title.to_string(),
            tags: entry.tags.clone(),
            children_count: entry.children_count,
            descendant_count: entry.descendant_count,
        }
    }
}
