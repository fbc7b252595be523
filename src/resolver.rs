use crate::errors::CopyError;
use crate::patterns::ExcludeRules;
use crate::walker::expand_dir;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};

/// A file selected for rendering, together with the directory that anchors
/// its relative exclusion matching and labeling: the selected folder for
/// files found by expansion, the file's parent for directly selected files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub path: PathBuf,
    pub root: PathBuf,
}

/// Turns a mixed selection of files and folders into a flat, deduplicated
/// file list in first-occurrence order. Folders are expanded recursively
/// with exclusion pruning; directly selected files are kept unless they are
/// themselves excluded. A selection entry that cannot be stat'd fails the
/// whole resolution, naming the offending path.
pub async fn resolve(
    selection: &[PathBuf],
    configured_excludes: &[String],
) -> Result<Vec<ResolvedFile>, CopyError> {
    let rules = ExcludeRules::with_builtin(configured_excludes);
    let cwd = std::env::current_dir()?;

    let mut resolved = Vec::new();
    for entry in selection {
        let entry = absolutize(entry, &cwd);
        let metadata = fs::metadata(&entry).await.map_err(|e| CopyError::StatFailure {
            path: entry.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            debug!("Expanding selected folder: {}", entry.display());
            let files = expand_dir(&entry, &rules, &entry).await?;
            resolved.extend(files.into_iter().map(|path| ResolvedFile {
                path,
                root: entry.clone(),
            }));
        } else {
            let root = entry
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| entry.clone());
            if rules.is_excluded(&entry, &root) {
                debug!("Skipping excluded selection entry: {}", entry.display());
            } else {
                resolved.push(ResolvedFile { path: entry, root });
            }
        }
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    resolved.retain(|file| seen.insert(file.path.clone()));
    trace!("Resolved {} file(s)", resolved.len());

    Ok(resolved)
}

pub(crate) fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
