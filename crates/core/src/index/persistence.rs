//! Index file loading and saving.
//!
//! Saving recomputes the subtree counts of every entry in the index being
//! written, walking each entry's child directory. Every save is therefore
//! self-healing against count drift, at the cost of some redundant reads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::errors::{StoreError, StoreResult};
use crate::index::types::{IndexEntry, NoteIndex, INDEX_FILE};

/// Load the index of `dir`.
///
/// A missing index file yields an empty index. An unparseable one is a
/// [`StoreError::CorruptIndex`]: silently treating it as empty would
/// destroy existing entries on the next save.
pub fn load(dir: &Path) -> StoreResult<NoteIndex> {
    let path = dir.join(INDEX_FILE);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(NoteIndex::new()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    serde_json::from_str(&raw).map_err(|source| StoreError::CorruptIndex { path, source })
}

/// Save the index of `dir`, recomputing the counts of every entry first.
///
/// Creates `dir` if it does not exist yet.
pub fn save(dir: &Path, index: &mut NoteIndex) -> StoreResult<()> {
    for entry in index.values_mut() {
        refresh_counts(dir, entry)?;
    }

    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let path = dir.join(INDEX_FILE);
    let raw = serde_json::to_string_pretty(index)
        .map_err(|source| StoreError::EncodeIndex { path: path.clone(), source })?;

    trace!(path = %path.display(), entries = index.len(), "saving index");
    fs::write(&path, raw).map_err(|e| StoreError::io(path, e))
}

/// Recompute one entry's `children_count`/`descendant_count` from its child
/// directory. Both fields are absent, not zero, for leaf notes.
fn refresh_counts(dir: &Path, entry: &mut IndexEntry) -> StoreResult<()> {
    let child = child_dir(dir, entry);
    let children = load(&child)?.len() as u64;

    if children == 0 {
        entry.children_count = None;
        entry.descendant_count = None;
    } else {
        entry.children_count = Some(children);
        entry.descendant_count = Some(subtree_total(&child)?);
    }
    Ok(())
}

/// Total number of notes anywhere beneath `dir` (including its own level).
pub fn subtree_total(dir: &Path) -> StoreResult<u64> {
    let index = load(dir)?;
    let mut total = index.len() as u64;
    for entry in index.values() {
        total += subtree_total(&child_dir(dir, entry))?;
    }
    Ok(total)
}

/// Directory holding an entry's children: the sibling directory named after
/// the note's basename minus `.md`.
fn child_dir(dir: &Path, entry: &IndexEntry) -> PathBuf {
    let base = entry.filename.rsplit('/').next().unwrap_or(&entry.filename);
    dir.join(base.strip_suffix(".md").unwrap_or(base))
}
