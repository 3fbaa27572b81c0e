//! Empty-directory cleanup after note removal.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::index::{self, INDEX_FILE};

/// Remove `dir` if it is empty, or contains nothing but an index file
/// holding an empty mapping.
///
/// Must run after the index save that reflects the removal; mid-operation
/// the index file itself would make the directory look non-empty.
pub(crate) fn prune_if_empty(dir: &Path) -> StoreResult<()> {
    let entries = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(StoreError::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        names.push(entry.file_name());
    }

    let only_index = names.len() == 1 && names[0] == INDEX_FILE;
    if only_index {
        if !index::load(dir)?.is_empty() {
            return Ok(());
        }
        let path = dir.join(INDEX_FILE);
        fs::remove_file(&path).map_err(|e| StoreError::io(path, e))?;
    } else if !names.is_empty() {
        return Ok(());
    }

    fs::remove_dir(dir).map_err(|e| StoreError::io(dir, e))?;
    debug!(dir = %dir.display(), "pruned empty directory");
    Ok(())
}
