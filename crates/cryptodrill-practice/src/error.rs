//! Error types for practice sessions

use cryptodrill_ciphers::{CipherError, CipherId};
use thiserror::Error;

/// Errors that can occur while drafting questions or running a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    /// Invalid generator configuration
    #[error("Invalid generator configuration: {0}")]
    InvalidConfiguration(String),

    /// Transform library rejected a drafted key or direction
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Bounded key search ran out of attempts
    #[error("No valid key found for {cipher} after {attempts} attempts")]
    NoValidKey {
        /// Cipher whose key was being drawn
        cipher: CipherId,
        /// Number of candidates tried
        attempts: u32,
    },

    /// Drafted answer did not match the transform output
    #[error("Drafted answer for {cipher} does not match the transform output")]
    AnswerMismatch {
        /// Cipher of the rejected draft
        cipher: CipherId,
    },

    /// Every attempt to draft a question failed
    #[error("Could not generate a {cipher} question after {attempts} attempts")]
    GenerationFailed {
        /// Cipher that was asked for
        cipher: CipherId,
        /// Attempts made
        attempts: u32,
    },

    /// An answer was submitted with no question on the table
    #[error("No active question")]
    NoActiveQuestion,
}

/// Result type for practice operations
pub type Result<T> = std::result::Result<T, PracticeError>;
