//! notekeep-core: hierarchical markdown note storage.
//!
//! Notes are markdown files organized in a tree of directories. Each
//! directory carries a sidecar `notes_index.json` mapping note titles to
//! filenames, tags and aggregate child/descendant counts. The [`Store`]
//! facade keeps the index and the filesystem tree consistent under
//! insert, delete and move, rewrites reference links on move, and cleans
//! up directories that become empty.

pub mod config;
pub mod errors;
pub mod index;
pub mod note;
pub mod slug;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use index::{IndexEntry, NoteIndex, NoteInfo};
pub use store::Store;
