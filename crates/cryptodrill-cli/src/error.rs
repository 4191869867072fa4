//! Error types for the command-line front end.

use cryptodrill_ciphers::CipherError;
use cryptodrill_practice::PracticeError;
use thiserror::Error;

/// Errors raised while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid option values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Transform failed (bad key, unsupported direction)
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Question drafting or session failure
    #[error(transparent)]
    Practice(#[from] PracticeError),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
