use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("No files or folders selected")]
    EmptySelection,

    #[error("No files found in the selection after applying exclude patterns")]
    NoFilesAfterFiltering,

    #[error("Cannot inspect {}: {reason}", .path.display())]
    StatFailure { path: PathBuf, reason: String },

    #[error("Cannot read {} as text: {reason}", .path.display())]
    ReadFailure { path: PathBuf, reason: String },

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tokenizer error: {0}")]
    TokenizerError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CopyError {
    fn from(err: std::io::Error) -> Self {
        CopyError::IoError(err.to_string())
    }
}
