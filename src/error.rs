use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlagImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid selector: {reason}")]
    Selector { reason: String },

    #[error("No licence found on file page: {url}")]
    LicenceNotFound { url: String },

    #[error("File already exists: {path}")]
    PlaceholderExists { path: String },

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

impl FlagImportError {
    /// Process exit code for this failure. A rejected URL is not an error and
    /// exits with [`crate::types::EXIT_REJECTED`] instead.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LicenceNotFound { .. } => crate::types::EXIT_LICENCE_NOT_FOUND,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlagImportError>;
