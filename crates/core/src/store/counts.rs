//! Ancestor count maintenance.

use crate::errors::StoreResult;
use crate::index;
use crate::store::Store;

impl Store {
    /// Re-sync the aggregate counts along a note's ancestor chain.
    ///
    /// Walks the chain of ancestor directory segments from the root inward.
    /// At each level, if an entry matches the ancestor path built so far,
    /// the level's index is resaved; saving recomputes every entry's counts
    /// from its child directory, so the walk is idempotent and usable as a
    /// general re-sync primitive after add, delete and move.
    pub(crate) fn sync_ancestor_counts(&self, filename: &str) -> StoreResult<()> {
        let Some((dir_rel, _)) = filename.rsplit_once('/') else {
            return Ok(());
        };

        let mut level = self.root().to_path_buf();
        let mut prefix = String::new();
        for segment in dir_rel.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let ancestor = format!("{prefix}.md");

            let mut idx = index::load(&level)?;
            if idx.values().any(|e| e.filename == ancestor) {
                index::save(&level, &mut idx)?;
            }

            level = level.join(segment);
        }
        Ok(())
    }
}
