//! Common interface implemented by every cipher
//!
//! Each cipher validates its key once at construction time and then exposes
//! both directions through [`ClassicalCipher`]. Directions a cipher does not
//! implement keep the default bodies, which report
//! [`CipherError::Unsupported`].

use crate::catalog::{CipherId, Direction};
use crate::error::CipherError;

/// A keyed classical cipher
pub trait ClassicalCipher {
    /// Catalog identifier of this cipher
    fn id(&self) -> CipherId;

    /// Plaintext to ciphertext
    fn encrypt(&self, _text: &str) -> Result<String, CipherError> {
        Err(CipherError::unsupported(self.id(), Direction::Encrypt))
    }

    /// Ciphertext to plaintext
    fn decrypt(&self, _text: &str) -> Result<String, CipherError> {
        Err(CipherError::unsupported(self.id(), Direction::Decrypt))
    }

    /// Applies the rule for `direction`
    fn apply(&self, text: &str, direction: Direction) -> Result<String, CipherError> {
        match direction {
            Direction::Encrypt => self.encrypt(text),
            Direction::Decrypt => self.decrypt(text),
        }
    }
}
