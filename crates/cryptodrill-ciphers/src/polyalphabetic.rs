//! Polyalphabetic ciphers: Porta and running key
//!
//! Both ciphers cycle through the letters of their key. Only letters of the
//! text consume a key letter; spaces and punctuation are copied without
//! advancing the key cursor.

use crate::alphabet;
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;

fn key_indices(cipher: CipherId, key: &str) -> Result<Vec<u8>, CipherError> {
    let letters: Vec<u8> = key.chars().filter_map(alphabet::index_of).collect();
    if letters.is_empty() {
        return Err(CipherError::key_format(
            cipher,
            "key must contain at least one letter",
        ));
    }
    Ok(letters)
}

/// Walks `text`, pairing every letter with the next key letter.
fn keyed_map(text: &str, key: &[u8], f: impl Fn(i64, i64) -> i64) -> String {
    let mut cursor = 0usize;
    text.chars()
        .map(|c| {
            if alphabet::index_of(c).is_none() {
                return c;
            }
            let k = i64::from(key[cursor % key.len()]);
            cursor += 1;
            alphabet::map_letter(c, |p| f(p, k))
        })
        .collect()
}

/// Porta cipher
///
/// Key letters are grouped in pairs (AB, CD, ..., YZ); each pair selects one
/// row of the tableau. A row swaps the two halves of the alphabet with an
/// offset, so the same row maps A–M onto N–Z and back. Encryption and
/// decryption are therefore the same operation.
///
/// Only the AB row is a plain shift (ROT13). From CD onwards the N–Z half
/// of each row is the inverse of its A–M half rather than a continued
/// shift, so rows differ from a table of pure shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Porta {
    key: Vec<u8>,
}

impl Porta {
    /// Builds the cipher from the letters of `key`
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            key: key_indices(CipherId::Porta, key)?,
        })
    }

    /// Key letters as alphabet indices
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Tableau lookup: letter index `p` under key letter index `k`
    pub fn tableau(k: i64, p: i64) -> i64 {
        let row = k.rem_euclid(26) / 2;
        if p < 13 {
            13 + (p + row) % 13
        } else {
            (p - 13 - row).rem_euclid(13)
        }
    }

    /// The 26-letter tableau row for key letter index `k`
    pub fn row(k: i64) -> String {
        (0..26).map(|p| alphabet::letter(Self::tableau(k, p))).collect()
    }
}

impl ClassicalCipher for Porta {
    fn id(&self) -> CipherId {
        CipherId::Porta
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(keyed_map(text, &self.key, Self::tableau))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        self.encrypt(text)
    }
}

/// Running key cipher: each letter is shifted by the next key letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningKey {
    key: Vec<u8>,
}

impl RunningKey {
    /// Builds the cipher from the letters of `key`
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            key: key_indices(CipherId::RunningKey, key)?,
        })
    }

    /// Key letters as alphabet indices
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl ClassicalCipher for RunningKey {
    fn id(&self) -> CipherId {
        CipherId::RunningKey
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(keyed_map(text, &self.key, |p, k| p + k))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(keyed_map(text, &self.key, |c, k| c - k))
    }
}
