use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CclError {
    #[error(
        "missing API credential: set ABSTRACT_API_KEY in the environment or a .env file, \
         or pass --api-key"
    )]
    MissingCredential,
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("rate limit still in effect after {attempts} attempts")]
    RateLimitExceeded { attempts: u32 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CclError>;
