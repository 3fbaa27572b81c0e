//! The note store: CRUD, hierarchy navigation, move and tag mutation over
//! a root directory of markdown files and per-directory indexes.
//!
//! The store is a stateless facade. Every operation re-reads indexes from
//! disk, trading performance for read-your-writes consistency within a
//! single process. Single-writer access is assumed; callers needing
//! multi-process safety must serialize externally.

mod cleanup;
mod counts;
mod relocate;
mod tags;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::index::{self, IndexEntry, NoteIndex, NoteInfo};
use crate::note;
use crate::slug;

/// A hierarchical note store rooted at a directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create a note and register it in its directory's index.
    ///
    /// `parent` may name a nested directory (`a/b`), with or without a
    /// trailing `.md`; missing directories are created. Returns the new
    /// note's root-relative path.
    pub fn add_note(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
        parent: Option<&str>,
    ) -> StoreResult<String> {
        let parent_rel = parent.map(slug::normalize_parent).unwrap_or("");
        let dir = self.dir_path(parent_rel);
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;

        let base = slug::unique_in(&dir, &slug::slugify(title));
        let rel = join_rel(parent_rel, &base);

        let path = dir.join(&base);
        fs::write(&path, note::format_note(title, tags, content))
            .map_err(|e| StoreError::io(path, e))?;

        let mut idx = index::load(&dir)?;
        idx.insert(title.to_string(), IndexEntry::new(rel.clone(), tags.to_vec()));
        index::save(&dir, &mut idx)?;

        if !parent_rel.is_empty() {
            self.sync_ancestor_counts(&rel)?;
        }

        debug!(filename = %rel, "note added");
        Ok(rel)
    }

    /// Read a note body verbatim. `None` if the file does not exist.
    ///
    /// No index lookup is involved in plain retrieval.
    pub fn get_note(&self, filename: &str) -> StoreResult<Option<String>> {
        let path = self.root.join(filename);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    /// List the direct children of the root or of a parent directory, in
    /// insertion order. A missing subdirectory lists as empty.
    pub fn list_notes(&self, parent: Option<&str>) -> StoreResult<Vec<NoteInfo>> {
        let parent_rel = parent.map(slug::normalize_parent).unwrap_or("");
        let idx = index::load(&self.dir_path(parent_rel))?;
        Ok(idx.iter().map(|(title, e)| NoteInfo::from_entry(title, e)).collect())
    }

    /// Replace a note's content and tags in place.
    ///
    /// The stored title is immutable; there is no rename-via-update.
    /// Returns false if the file or its index entry is missing.
    pub fn update_note(
        &self,
        filename: &str,
        content: &str,
        tags: &[String],
    ) -> StoreResult<bool> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(false);
        }

        let (dir, mut idx) = self.owning_index(filename)?;
        let Some((title, entry)) = find_entry_mut(&mut idx, filename) else {
            return Ok(false);
        };
        let title = title.to_string();
        entry.tags = tags.to_vec();

        fs::write(&path, note::format_note(&title, tags, content))
            .map_err(|e| StoreError::io(path, e))?;
        index::save(&dir, &mut idx)?;

        debug!(filename, "note updated");
        Ok(true)
    }

    /// Delete a note file and its index entry.
    ///
    /// For notes inside a subdirectory, ancestor counts are refreshed and
    /// the directory is pruned if it is now empty. Returns false if the
    /// file is missing.
    pub fn delete_note(&self, filename: &str) -> StoreResult<bool> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(false);
        }

        let (dir, mut idx) = self.owning_index(filename)?;
        idx.retain(|_, e| e.filename != filename);
        index::save(&dir, &mut idx)?;

        fs::remove_file(&path).map_err(|e| StoreError::io(path, e))?;

        if filename.contains('/') {
            self.sync_ancestor_counts(filename)?;
            cleanup::prune_if_empty(&dir)?;
        }

        debug!(filename, "note deleted");
        Ok(true)
    }

    /// Absolute path of the directory named by a root-relative spec.
    fn dir_path(&self, rel: &str) -> PathBuf {
        if rel.is_empty() {
            self.root.clone()
        } else {
            self.root.join(rel)
        }
    }

    /// Load the index of the directory that directly contains `filename`.
    fn owning_index(&self, filename: &str) -> StoreResult<(PathBuf, NoteIndex)> {
        let dir_rel = filename.rsplit_once('/').map_or("", |(dir, _)| dir);
        let dir = self.dir_path(dir_rel);
        let idx = index::load(&dir)?;
        Ok((dir, idx))
    }
}

/// Find the entry whose stored filename matches exactly.
fn find_entry_mut<'a>(
    idx: &'a mut NoteIndex,
    filename: &str,
) -> Option<(&'a str, &'a mut IndexEntry)> {
    idx.iter_mut()
        .find(|(_, e)| e.filename == filename)
        .map(|(title, e)| (title.as_str(), e))
}

/// Join a root-relative directory and a basename with `/` separators.
fn join_rel(dir: &str, base: &str) -> String {
    if dir.is_empty() {
        base.to_string()
    } else {
        format!("{dir}/{base}")
    }
}
