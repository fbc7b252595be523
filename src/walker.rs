use crate::errors::CopyError;
use crate::patterns::ExcludeRules;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};

/// Recursively expands `dir` into the files it contains, pruning excluded
/// entries. An excluded directory is never listed, so its subtree costs
/// nothing. `root` anchors relative exclusion matching for the whole walk.
///
/// Traversal is depth-first over an explicit work-list. Within one
/// directory, entries are visited in sorted order with files before
/// subdirectories, so the yielded order is deterministic for a given
/// filesystem state.
pub async fn expand_dir(
    dir: &Path,
    rules: &ExcludeRules,
    root: &Path,
) -> Result<Vec<PathBuf>, CopyError> {
    let mut files = Vec::new();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        // Guards against directory cycles; symlinked directories are not
        // descended into, so this only fires on pathological layouts.
        let canonical = fs::canonicalize(&current)
            .await
            .map_err(|e| stat_failure(&current, e))?;
        if !visited.insert(canonical) {
            debug!("Skipping already-visited directory: {}", current.display());
            continue;
        }

        trace!("Listing directory: {}", current.display());
        let mut entries = fs::read_dir(&current)
            .await
            .map_err(|e| stat_failure(&current, e))?;

        let mut files_here = Vec::new();
        let mut dirs_here = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| stat_failure(&current, e))?
        {
            let path = entry.path();
            if rules.is_excluded(&path, root) {
                debug!("Skipping excluded path: {}", path.display());
                continue;
            }
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| stat_failure(&path, e))?;
            if file_type.is_dir() {
                dirs_here.push(path);
            } else {
                files_here.push(path);
            }
        }

        files_here.sort();
        dirs_here.sort();
        files.extend(files_here);
        // Reverse push so the first subdirectory is expanded first.
        for sub in dirs_here.into_iter().rev() {
            pending.push(sub);
        }
    }

    Ok(files)
}

fn stat_failure(path: &Path, err: std::io::Error) -> CopyError {
    CopyError::StatFailure {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
