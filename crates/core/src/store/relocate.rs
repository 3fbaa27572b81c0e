//! Note relocation and best-effort reference rewriting.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::{StoreError, StoreResult};
use crate::index::{self, IndexEntry};
use crate::note;
use crate::slug;
use crate::store::{join_rel, Store};

impl Store {
    /// Move a note into another folder (or the root), preserving title,
    /// tags and content, and rewriting references to its old path.
    ///
    /// Moving a note to its current effective location is a no-op that
    /// returns the unchanged filename without touching disk. Returns the
    /// new root-relative filename otherwise.
    pub fn move_note(
        &self,
        filename: &str,
        target_folder: Option<&str>,
    ) -> StoreResult<String> {
        let body = self
            .get_note(filename)?
            .ok_or_else(|| StoreError::NotFound(filename.to_string()))?;

        let (src_dir, src_idx) = self.owning_index(filename)?;
        let (title, tags) = src_idx
            .iter()
            .find(|(_, e)| e.filename == filename)
            .map(|(t, e)| (t.clone(), e.tags.clone()))
            .ok_or_else(|| StoreError::NotFound(filename.to_string()))?;

        let target = target_folder.map(slug::normalize_parent).unwrap_or("");
        let base = slug::slugify(&title);
        if join_rel(target, &base) == filename {
            return Ok(filename.to_string());
        }

        let dest_dir = self.dir_path(target);
        fs::create_dir_all(&dest_dir).map_err(|e| StoreError::io(&dest_dir, e))?;
        let base = slug::unique_in(&dest_dir, &base);
        let new_rel = join_rel(target, &base);

        let new_path = dest_dir.join(&base);
        fs::write(&new_path, note::format_note(&title, &tags, note::strip_header(&body)))
            .map_err(|e| StoreError::io(new_path, e))?;

        let mut dest_idx = index::load(&dest_dir)?;
        dest_idx.insert(title.clone(), IndexEntry::new(new_rel.clone(), tags));
        index::save(&dest_dir, &mut dest_idx)?;

        // Reload rather than reuse: for a same-directory move the save
        // above already rewrote this index on disk.
        let mut src_idx = index::load(&src_dir)?;
        src_idx.retain(|_, e| e.filename != filename);
        index::save(&src_dir, &mut src_idx)?;

        let old_path = self.root().join(filename);
        fs::remove_file(&old_path).map_err(|e| StoreError::io(old_path, e))?;

        self.sync_ancestor_counts(filename)?;
        self.sync_ancestor_counts(&new_rel)?;

        if filename.contains('/') {
            super::cleanup::prune_if_empty(&src_dir)?;
        }

        self.rewrite_references(filename, &new_rel);

        debug!(from = filename, to = %new_rel, "note moved");
        Ok(new_rel)
    }

    /// Replace literal occurrences of `old_rel` with `new_rel` in every
    /// markdown file under the root, skipping the moved file itself.
    ///
    /// This is plain text substitution, not a markdown link parse, so
    /// collateral matches inside unrelated text are replaced too. Files
    /// that cannot be read or written are skipped, never retried: the move
    /// has already committed, so rewriting is best-effort.
    fn rewrite_references(&self, old_rel: &str, new_rel: &str) {
        let skip = self.root().join(new_rel);

        for entry in WalkDir::new(self.root()).follow_links(false) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry during reference rewrite");
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) || path == skip {
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(c) => c,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file during reference rewrite");
                    continue;
                }
            };
            if !content.contains(old_rel) {
                continue;
            }

            if let Err(e) = fs::write(path, content.replace(old_rel, new_rel)) {
                warn!(path = %path.display(), error = %e, "failed to rewrite reference");
            }
        }
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
