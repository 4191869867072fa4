//! Monoalphabetic substitution ciphers
//!
//! AtBash and Caesar are fixed-rule substitutions over the Latin alphabet.
//! [`Substitution`] covers the keyed family (Aristocrat, Aristocrat
//! Misspelled, Patristocrat and the Spanish Xenocrypt), which share one
//! mechanism and differ only in presentation. [`Cryptarithm`] applies a
//! possibly partial letter mapping.
//!
//! All of them keep the case of each input letter and pass any other
//! character through unchanged.

use crate::alphabet::{self, LATIN, SPANISH};
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;

/// Mirror alphabet: A↔Z, B↔Y, ...
///
/// Encryption and decryption are the same operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtBash;

impl AtBash {
    /// Mirror of a single character
    pub fn mirror(c: char) -> char {
        alphabet::map_letter(c, |i| 25 - i)
    }
}

impl ClassicalCipher for AtBash {
    fn id(&self) -> CipherId {
        CipherId::Atbash
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text.chars().map(Self::mirror).collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        self.encrypt(text)
    }
}

/// Shift cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    /// Shift used when the key does not contain a number
    pub const DEFAULT_SHIFT: i64 = 3;

    /// Parses the shift from `key`, falling back to [`Self::DEFAULT_SHIFT`]
    pub fn new(key: &str) -> Self {
        Self::with_shift(alphabet::leading_integer(key).unwrap_or(Self::DEFAULT_SHIFT))
    }

    /// Cipher with an explicit shift (any integer, reduced mod 26)
    pub const fn with_shift(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(26),
        }
    }

    /// Effective shift in `0..26`
    pub const fn shift(&self) -> i64 {
        self.shift
    }
}

impl ClassicalCipher for Caesar {
    fn id(&self) -> CipherId {
        CipherId::Caesar
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .chars()
            .map(|c| alphabet::map_letter(c, |i| i + self.shift))
            .collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .chars()
            .map(|c| alphabet::map_letter(c, |i| i - self.shift))
            .collect())
    }
}

/// Keyed alphabet permutation
///
/// The key is the cipher alphabet written under the plain alphabet. Non-letter
/// characters in the key are ignored; what remains must be a permutation of
/// the plain alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    id: CipherId,
    plain: &'static [char],
    key: Vec<char>,
}

impl Substitution {
    /// Builds a substitution for one of the keyed variants.
    ///
    /// [`CipherId::Xenocrypt`] uses the 27-letter Spanish alphabet; every
    /// other id uses the Latin alphabet.
    pub fn new(id: CipherId, key: &str) -> Result<Self, CipherError> {
        let plain: &'static [char] = if id == CipherId::Xenocrypt {
            &SPANISH
        } else {
            &LATIN
        };

        let key: Vec<char> = key
            .chars()
            .map(alphabet::to_upper)
            .filter(|c| plain.contains(c))
            .collect();

        if key.len() != plain.len() {
            let reason = if plain.len() == SPANISH.len() {
                format!(
                    "key must be 27 unique letters (including Ñ), got {}",
                    key.len()
                )
            } else {
                format!("key must be 26 unique letters, got {}", key.len())
            };
            return Err(CipherError::key_format(id, reason));
        }

        for (pos, c) in key.iter().enumerate() {
            if key[..pos].contains(c) {
                return Err(CipherError::key_constraint(
                    id,
                    format!("key letters must be unique, {c} appears more than once"),
                ));
            }
        }

        Ok(Self { id, plain, key })
    }

    /// Plain alphabet
    pub fn plain_alphabet(&self) -> &[char] {
        self.plain
    }

    /// Cipher alphabet, aligned with [`Self::plain_alphabet`]
    pub fn cipher_alphabet(&self) -> &[char] {
        &self.key
    }

    /// Substitutes one character plain -> cipher
    pub fn encrypt_char(&self, c: char) -> char {
        substitute(c, self.plain, &self.key)
    }

    /// Substitutes one character cipher -> plain
    pub fn decrypt_char(&self, c: char) -> char {
        substitute(c, &self.key, self.plain)
    }
}

impl ClassicalCipher for Substitution {
    fn id(&self) -> CipherId {
        self.id
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text.chars().map(|c| self.encrypt_char(c)).collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text.chars().map(|c| self.decrypt_char(c)).collect())
    }
}

fn substitute(c: char, from: &[char], to: &[char]) -> char {
    let upper = alphabet::to_upper(c);
    match from.iter().position(|&f| f == upper) {
        Some(pos) if c == upper => to[pos],
        Some(pos) => alphabet::to_lower(to[pos]),
        None => c,
    }
}

/// Letter mapping used to solve alphametic puzzles
///
/// The i-th key letter is the replacement for the i-th letter of the
/// alphabet. Keys shorter than 26 letters are allowed: letters without a
/// replacement pass through unchanged. Only the decrypt direction exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cryptarithm {
    mapping: Vec<char>,
}

impl Cryptarithm {
    /// Builds the mapping from the letters of `key` (at most 26 are used)
    pub fn new(key: &str) -> Self {
        let mapping = alphabet::ascii_letters(key).chars().take(26).collect();
        Self { mapping }
    }

    /// Replacement letters in alphabet order
    pub fn mapping(&self) -> &[char] {
        &self.mapping
    }

    /// Maps a single character
    pub fn solve_char(&self, c: char) -> char {
        match alphabet::index_of(c).and_then(|i| self.mapping.get(usize::from(i))) {
            Some(&mapped) if c.is_ascii_lowercase() => mapped.to_ascii_lowercase(),
            Some(&mapped) => mapped,
            None => c,
        }
    }
}

impl ClassicalCipher for Cryptarithm {
    fn id(&self) -> CipherId {
        CipherId::Cryptarithm
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text.chars().map(|c| self.solve_char(c)).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::Direction;

    const REVERSED: &str = "ZYXWVUTSRQPONMLKJIHGFEDCBA";
    const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

    #[test]
    fn test_atbash_known_vector() {
        assert_eq!(AtBash.encrypt("HELLO").unwrap(), "SVOOL");
        assert_eq!(AtBash.encrypt("Hello, World!").unwrap(), "Svool, Dliow!");
    }

    #[test]
    fn test_atbash_is_involutive() {
        let once = AtBash.encrypt("THE QUICK BROWN FOX").unwrap();
        assert_eq!(AtBash.decrypt(&once).unwrap(), "THE QUICK BROWN FOX");
    }

    #[test]
    fn test_caesar_known_vector() {
        let caesar = Caesar::new("3");
        assert_eq!(caesar.encrypt("HELLO").unwrap(), "KHOOR");
        assert_eq!(caesar.decrypt("KHOOR").unwrap(), "HELLO");
    }

    #[test]
    fn test_caesar_key_parsing() {
        assert_eq!(Caesar::new("").shift(), 3);
        assert_eq!(Caesar::new("shift").shift(), 3);
        assert_eq!(Caesar::new("0").shift(), 0);
        assert_eq!(Caesar::new("-1").shift(), 25);
        assert_eq!(Caesar::new("29").shift(), 3);
    }

    #[test]
    fn test_caesar_preserves_case_and_punctuation() {
        let caesar = Caesar::with_shift(1);
        assert_eq!(caesar.encrypt("Zz, Aa!").unwrap(), "Aa, Bb!");
    }

    #[test]
    fn test_substitution_reversed_alphabet_matches_atbash() {
        let sub = Substitution::new(CipherId::Aristocrat, REVERSED).unwrap();
        assert_eq!(
            sub.encrypt("Attack at dawn").unwrap(),
            AtBash.encrypt("Attack at dawn").unwrap()
        );
    }

    #[test]
    fn test_substitution_round_trip() {
        let sub = Substitution::new(CipherId::Patristocrat, QWERTY).unwrap();
        let ct = sub.encrypt("Meet me at noon.").unwrap();
        assert_eq!(ct, "Dttz dt qz fggf.");
        assert_eq!(sub.decrypt(&ct).unwrap(), "Meet me at noon.");
    }

    #[test]
    fn test_substitution_key_is_case_insensitive_and_ignores_separators() {
        let spaced = "qwer tyui opas dfgh jklz xcvb nm";
        let sub = Substitution::new(CipherId::AristocratMisspelled, spaced).unwrap();
        assert_eq!(sub.cipher_alphabet().iter().collect::<String>(), QWERTY);
    }

    #[test]
    fn test_substitution_rejects_short_key() {
        let err = Substitution::new(CipherId::Aristocrat, "ABC").unwrap_err();
        assert!(matches!(err, CipherError::KeyFormat { .. }));
        assert!(err.to_string().contains("26 unique letters"));
    }

    #[test]
    fn test_substitution_rejects_duplicates() {
        let err =
            Substitution::new(CipherId::Aristocrat, "AACDEFGHIJKLMNOPQRSTUVWXYZ").unwrap_err();
        assert!(matches!(err, CipherError::KeyConstraint { .. }));
    }

    #[test]
    fn test_xenocrypt_handles_enye() {
        let key: String = SPANISH.iter().rev().collect();
        let xeno = Substitution::new(CipherId::Xenocrypt, &key).unwrap();
        // Ñ is index 14 of 27, so it maps to index 12 (M) in the reversed alphabet
        assert_eq!(xeno.encrypt("Ñ").unwrap(), "M");
        assert_eq!(xeno.encrypt("niño").unwrap(), "nrml");
        assert_eq!(xeno.decrypt("nrml").unwrap(), "niño");
    }

    #[test]
    fn test_xenocrypt_requires_27_letters() {
        let err = Substitution::new(CipherId::Xenocrypt, REVERSED).unwrap_err();
        assert!(err.to_string().contains("27 unique letters"));
    }

    #[test]
    fn test_cryptarithm_partial_key() {
        let solver = Cryptarithm::new("ZY");
        assert_eq!(solver.decrypt("ABC abc").unwrap(), "ZYC zyc");
        assert!(matches!(
            solver.apply("ABC", Direction::Encrypt),
            Err(CipherError::Unsupported { .. })
        ));
    }
}
