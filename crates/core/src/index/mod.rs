//! Per-directory note indexes.
//!
//! Every directory in the store carries at most one sidecar index file
//! mapping note titles to filename, tags and aggregate subtree counts.

pub mod persistence;
pub mod types;

pub use persistence::{load, save, subtree_total};
pub use types::{IndexEntry, NoteIndex, NoteInfo, INDEX_FILE};
