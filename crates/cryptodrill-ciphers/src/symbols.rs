//! Symbol-stream ciphers: Baconian and Dancing Men
//!
//! Both replace each letter with a token and join the tokens with spaces.
//! Decryption splits on whitespace and maps every token it recognises back
//! to its letter.

use crate::alphabet;
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;

/// Five-symbol Baconian codes, `A`=0 and `B`=1 in binary, for A..Z
pub const BACONIAN_TABLE: [&str; 26] = [
    "AAAAA", "AAAAB", "AAABA", "AAABB", "AABAA", "AABAB", "AABBA", "AABBB", "ABAAA", "ABAAB",
    "ABABA", "ABABB", "ABBAA", "ABBAB", "ABBBA", "ABBBB", "BAAAA", "BAAAB", "BAABA", "BAABB",
    "BABAA", "BABAB", "BABBA", "BABBB", "BBAAA", "BBAAB",
];

/// Baconian cipher
#[derive(Debug, Clone, Copy, Default)]
pub struct Baconian;

impl Baconian {
    /// Code for a letter (any case)
    pub fn code(c: char) -> Option<&'static str> {
        alphabet::index_of(c).map(|i| BACONIAN_TABLE[usize::from(i)])
    }

    /// Letter for a five-symbol code (any case)
    pub fn letter(code: &str) -> Option<char> {
        let upper = code.to_ascii_uppercase();
        BACONIAN_TABLE
            .iter()
            .position(|candidate| *candidate == upper)
            .and_then(|i| alphabet::LATIN.get(i).copied())
    }
}

impl ClassicalCipher for Baconian {
    fn id(&self) -> CipherId {
        CipherId::Baconian
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let tokens: Vec<String> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Self::code(c).map_or_else(|| c.to_string(), str::to_string))
            .collect();
        Ok(tokens.join(" "))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .split_whitespace()
            .map(|token| Self::letter(token).map_or_else(|| token.to_string(), String::from))
            .collect())
    }
}

/// Glyph repeated to form a Dancing Men figure
pub const GLYPH: char = '⚡';

/// Dancing Men cipher: letter n of the alphabet becomes a run of n glyphs
#[derive(Debug, Clone, Copy, Default)]
pub struct DancingMen;

impl DancingMen {
    /// Glyph run for a letter (any case)
    pub fn figure(c: char) -> Option<String> {
        alphabet::index_of(c).map(|i| std::iter::repeat_n(GLYPH, usize::from(i) + 1).collect())
    }

    /// Letter for a glyph run
    pub fn letter(token: &str) -> Option<char> {
        let count = token.chars().count();
        if count == 0 || count > 26 || token.chars().any(|c| c != GLYPH) {
            return None;
        }
        alphabet::LATIN.get(count - 1).copied()
    }
}

impl ClassicalCipher for DancingMen {
    fn id(&self) -> CipherId {
        CipherId::DancingMen
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let tokens: Vec<String> = text
            .chars()
            .map(|c| Self::figure(c).unwrap_or_else(|| c.to_string()))
            .collect();
        Ok(tokens.join(" "))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .split_whitespace()
            .map(|token| Self::letter(token).map_or_else(|| token.to_string(), String::from))
            .collect())
    }
}
