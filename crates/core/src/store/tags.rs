//! Tag mutation.
//!
//! Adding tags produces a de-duplicated, ascending-sorted set; removing
//! tags preserves the existing order. The asymmetry is part of the
//! observable contract.

use std::fs;

use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::index;
use crate::note;
use crate::store::{find_entry_mut, Store};

impl Store {
    /// Add tags to a note. The resulting tag set is de-duplicated and
    /// sorted ascending. Returns false if the note or its index entry is
    /// missing.
    pub fn add_tags(&self, filename: &str, tags: &[String]) -> StoreResult<bool> {
        self.mutate_tags(filename, |current| {
            let mut merged: Vec<String> =
                current.iter().chain(tags.iter()).cloned().collect();
            merged.sort();
            merged.dedup();
            merged
        })
    }

    /// Remove tags from a note, preserving the order of the remaining
    /// tags. Returns false if the note or its index entry is missing.
    pub fn remove_tags(&self, filename: &str, tags: &[String]) -> StoreResult<bool> {
        self.mutate_tags(filename, |current| {
            current.iter().filter(|t| !tags.contains(t)).cloned().collect()
        })
    }

    /// Recompute a note's tag set, re-splice its header and persist to
    /// both the file and the index.
    fn mutate_tags(
        &self,
        filename: &str,
        compute: impl FnOnce(&[String]) -> Vec<String>,
    ) -> StoreResult<bool> {
        let Some(body) = self.get_note(filename)? else {
            return Ok(false);
        };

        let (dir, mut idx) = self.owning_index(filename)?;
        let Some((title, entry)) = find_entry_mut(&mut idx, filename) else {
            return Ok(false);
        };
        let title = title.to_string();
        let new_tags = compute(&entry.tags);
        entry.tags = new_tags.clone();

        let path = self.root().join(filename);
        fs::write(&path, note::format_note(&title, &new_tags, note::strip_header(&body)))
            .map_err(|e| StoreError::io(path, e))?;
        index::save(&dir, &mut idx)?;

        debug!(filename, tags = ?new_tags, "tags updated");
        Ok(true)
    }
}
