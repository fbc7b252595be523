use crate::errors::CopyError;
use crate::render::{join_blocks, render_blocks, RenderedBlock};
use crate::reporting::print_stats;
use crate::resolver::{absolutize, resolve};
use arboard::Clipboard;
use async_trait::async_trait;
use std::path::PathBuf;
use tiktoken_rs::get_bpe_from_model;
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct CopierConfig {
    pub exclude_patterns: Vec<String>,
    pub project_roots: Vec<PathBuf>,
    pub model: String,
    pub no_stats: bool,
}

impl Default for CopierConfig {
    fn default() -> Self {
        CopierConfig {
            exclude_patterns: Vec::new(),
            project_roots: Vec::new(),
            model: "gpt-4o".to_owned(),
            no_stats: false,
        }
    }
}

/// The finished document together with the number of files it contains.
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    pub document: String,
    pub file_count: usize,
}

/// Resolves and renders a selection without touching the clipboard. This is
/// the whole pipeline up to the hand-off: refuse an empty selection, resolve
/// folders and files against the exclude rules, refuse an empty result,
/// render every file into a labeled block.
pub async fn build_document(
    selection: &[PathBuf],
    config: &CopierConfig,
) -> Result<CopyOutcome, CopyError> {
    let blocks = prepare_blocks(selection, config).await?;
    Ok(CopyOutcome {
        document: join_blocks(&blocks),
        file_count: blocks.len(),
    })
}

async fn prepare_blocks(
    selection: &[PathBuf],
    config: &CopierConfig,
) -> Result<Vec<RenderedBlock>, CopyError> {
    if selection.is_empty() {
        return Err(CopyError::EmptySelection);
    }

    debug!("Resolving selection of {} entries", selection.len());
    let resolved = resolve(selection, &config.exclude_patterns).await?;
    if resolved.is_empty() {
        return Err(CopyError::NoFilesAfterFiltering);
    }

    // Roots given as relative paths are anchored the same way selection
    // entries are, so `starts_with` compares absolute against absolute.
    let cwd = std::env::current_dir()?;
    let project_roots: Vec<PathBuf> = config
        .project_roots
        .iter()
        .map(|root| absolutize(root, &cwd))
        .collect();

    render_blocks(&resolved, &project_roots).await
}

#[async_trait]
pub trait ClipboardCopier {
    async fn copy_selection_to_clipboard(
        &self,
        selection: Vec<PathBuf>,
    ) -> Result<usize, CopyError>;
}

pub struct BasicClipboardCopier {
    config: CopierConfig,
}

impl BasicClipboardCopier {
    pub fn new(config: CopierConfig) -> Self {
        BasicClipboardCopier { config }
    }
}

#[async_trait]
impl ClipboardCopier for BasicClipboardCopier {
    async fn copy_selection_to_clipboard(
        &self,
        selection: Vec<PathBuf>,
    ) -> Result<usize, CopyError> {
        let config = &self.config;
        let blocks = prepare_blocks(&selection, config).await?;

        if !config.no_stats {
            trace!("Encoding blocks to get token counts");
            let tokenizer = get_bpe_from_model(&config.model)
                .map_err(|e| CopyError::TokenizerError(e.to_string()))?;
            let token_counts: Vec<(String, usize)> = blocks
                .iter()
                .map(|block| {
                    (
                        block.label.clone(),
                        tokenizer.encode_ordinary(&block.text).len(),
                    )
                })
                .collect();
            print_stats(&token_counts);
        }

        let document = join_blocks(&blocks);
        trace!("Final document length: {}", document.len());

        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| CopyError::ClipboardInitError(e.to_string()))?;
        clipboard
            .set_text(document)
            .map_err(|e| CopyError::ClipboardWriteError(e.to_string()))?;

        info!("Copied {} file(s) to clipboard.", blocks.len());
        Ok(blocks.len())
    }
}

pub async fn copy_selection_to_clipboard(
    config: CopierConfig,
    selection: Vec<PathBuf>,
) -> Result<usize, CopyError> {
    let copier = BasicClipboardCopier::new(config);
    copier.copy_selection_to_clipboard(selection).await
}
