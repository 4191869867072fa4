//! Catalog-driven dispatch from a cipher id and raw key to a transform

use tracing::debug;

use crate::affine::Affine;
use crate::catalog::{CipherId, Direction};
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;
use crate::hill::{Hill2, Hill3};
use crate::morse::{FractionatedMorse, Morbit, Pollux};
use crate::polyalphabetic::{Porta, RunningKey};
use crate::rsa::ToyRsa;
use crate::substitution::{AtBash, Caesar, Cryptarithm, Substitution};
use crate::symbols::{Baconian, DancingMen};
use crate::transposition::{CompleteColumnar, Railfence};

/// Builds the cipher for `cipher` from a raw key string.
///
/// Keyless ciphers ignore `key`.
pub fn cipher_for(cipher: CipherId, key: &str) -> Result<Box<dyn ClassicalCipher>, CipherError> {
    Ok(match cipher {
        CipherId::Atbash => Box::new(AtBash),
        CipherId::Caesar => Box::new(Caesar::new(key)),
        CipherId::Aristocrat
        | CipherId::AristocratMisspelled
        | CipherId::Patristocrat
        | CipherId::Xenocrypt => Box::new(Substitution::new(cipher, key)?),
        CipherId::Hill2x2 => Box::new(Hill2::new(key)?),
        CipherId::Hill3x3 => Box::new(Hill3::new(key)?),
        CipherId::Affine => Box::new(Affine::new(key)?),
        CipherId::Baconian => Box::new(Baconian),
        CipherId::FractionatedMorse => Box::new(FractionatedMorse::new(key)?),
        CipherId::Porta => Box::new(Porta::new(key)?),
        CipherId::DancingMen => Box::new(DancingMen),
        CipherId::Rsa => Box::new(ToyRsa::new(key)?),
        CipherId::RunningKey => Box::new(RunningKey::new(key)?),
        CipherId::Railfence => Box::new(Railfence::new(key)?),
        CipherId::Cryptarithm => Box::new(Cryptarithm::new(key)),
        CipherId::CompleteColumnar => Box::new(CompleteColumnar::new(key)?),
        CipherId::Pollux => Box::new(Pollux),
        CipherId::Morbit => Box::new(Morbit::new(key)?),
    })
}

/// Applies `cipher` to `text` in `direction`.
///
/// Unsupported directions are rejected before the key is parsed, so a
/// Morbit decrypt reports [`CipherError::Unsupported`] even with a bad key.
pub fn transform(
    cipher: CipherId,
    text: &str,
    key: &str,
    direction: Direction,
) -> Result<String, CipherError> {
    if !cipher.spec().supports(direction) {
        return Err(CipherError::unsupported(cipher, direction));
    }
    debug!(
        cipher = %cipher,
        direction = %direction,
        text_len = text.len(),
        "Applying transform"
    );
    cipher_for(cipher, key)?.apply(text, direction)
}

/// Shorthand for [`transform`] with [`Direction::Encrypt`]
pub fn encrypt(cipher: CipherId, text: &str, key: &str) -> Result<String, CipherError> {
    transform(cipher, text, key, Direction::Encrypt)
}

/// Shorthand for [`transform`] with [`Direction::Decrypt`]
pub fn decrypt(cipher: CipherId, text: &str, key: &str) -> Result<String, CipherError> {
    transform(cipher, text, key, Direction::Decrypt)
}
