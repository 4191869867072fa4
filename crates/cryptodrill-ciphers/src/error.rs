//! Error types for cipher transforms

use thiserror::Error;

use crate::catalog::{CipherId, Direction};

/// Errors that can occur while preparing or applying a cipher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key has the wrong number or type of tokens
    #[error("Invalid key for {cipher}: {reason}")]
    KeyFormat {
        /// Cipher whose key grammar was violated
        cipher: CipherId,
        /// Human-readable reason
        reason: String,
    },

    /// Key is well formed but fails a mathematical precondition
    #[error("Key rejected for {cipher}: {reason}")]
    KeyConstraint {
        /// Cipher whose precondition failed
        cipher: CipherId,
        /// Human-readable reason
        reason: String,
    },

    /// Direction is not implemented for this cipher
    #[error("{cipher} does not support {direction}ion")]
    Unsupported {
        /// Cipher that was asked
        cipher: CipherId,
        /// Direction that is missing
        direction: Direction,
    },

    /// No cipher with this slug
    #[error("Unknown cipher: {0}")]
    UnknownCipher(String),

    /// Direction string not recognised
    #[error("Unknown direction: {0} (expected encrypt or decrypt)")]
    UnknownDirection(String),
}

impl CipherError {
    pub(crate) fn key_format(cipher: CipherId, reason: impl Into<String>) -> Self {
        Self::KeyFormat {
            cipher,
            reason: reason.into(),
        }
    }

    pub(crate) fn key_constraint(cipher: CipherId, reason: impl Into<String>) -> Self {
        Self::KeyConstraint {
            cipher,
            reason: reason.into(),
        }
    }

    pub(crate) const fn unsupported(cipher: CipherId, direction: Direction) -> Self {
        Self::Unsupported { cipher, direction }
    }

    /// Whether the error comes from validating a key
    pub const fn is_key_error(&self) -> bool {
        matches!(self, Self::KeyFormat { .. } | Self::KeyConstraint { .. })
    }
}
