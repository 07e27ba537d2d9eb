use std::path::PathBuf;

/// Alias for `Result<T, PromptError>`.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors that can occur while writing prompt files.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The output directory could not be created.
    #[error("cannot create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A prompt file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
