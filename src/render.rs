use crate::classify::is_binary;
use crate::errors::CopyError;
use crate::resolver::ResolvedFile;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, trace};

/// Fixed marker prepended to every block header. Deliberately not derived
/// from the target file's language.
pub const COMMENT_MARKER: &str = "//";

/// One rendered file: the label shown in the block header plus the complete
/// block text (header line and content, or the binary placeholder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub label: String,
    pub text: String,
}

/// Renders every resolved file into a block, in input order. File reads are
/// dispatched concurrently; `try_join_all` restores input order, so the
/// output is deterministic. The first read failure aborts the whole render.
pub async fn render_blocks(
    files: &[ResolvedFile],
    project_roots: &[PathBuf],
) -> Result<Vec<RenderedBlock>, CopyError> {
    let renders = files.iter().map(|file| render_block(file, project_roots));
    futures::future::try_join_all(renders).await
}

/// Joins blocks with exactly one blank line between them.
pub fn join_blocks(blocks: &[RenderedBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

async fn render_block(
    file: &ResolvedFile,
    project_roots: &[PathBuf],
) -> Result<RenderedBlock, CopyError> {
    let label = label_for(file, project_roots);

    if is_binary(&file.path) {
        debug!("Eliding binary file content: {}", file.path.display());
        return Ok(RenderedBlock {
            text: format!("{} Binary file: {}", COMMENT_MARKER, label),
            label,
        });
    }

    trace!("Reading file: {}", file.path.display());
    let content = fs::read_to_string(&file.path)
        .await
        .map_err(|e| CopyError::ReadFailure {
            path: file.path.clone(),
            reason: e.to_string(),
        })?;

    Ok(RenderedBlock {
        text: format!("{} File: {}\n{}", COMMENT_MARKER, label, content),
        label,
    })
}

/// Inside a known project root the label is the path relative to the file's
/// own resolution root, with no leading separator; outside any project root
/// it stays absolute.
fn label_for(file: &ResolvedFile, project_roots: &[PathBuf]) -> String {
    let in_project = project_roots.iter().any(|r| file.path.starts_with(r));
    if in_project {
        if let Ok(relative) = file.path.strip_prefix(&file.root) {
            return relative.display().to_string();
        }
    }
    file.path.display().to_string()
}
