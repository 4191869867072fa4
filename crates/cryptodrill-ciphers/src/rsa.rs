//! Letter-wise toy RSA
//!
//! Each letter index `m` becomes `(m^e mod n) mod 26`. The same formula is
//! used for both directions with whichever exponent the key provides, so a
//! decryption key `n, d` undoes an encryption key `n, e` only for some
//! letters. With the classroom key `n = 143` the letters
//! [`ROUND_TRIP_LETTERS`] survive `e = 7` followed by `d = 103`.

use crate::alphabet;
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;
use crate::math;

/// Classroom modulus (11 × 13)
pub const DEFAULT_MODULUS: u64 = 143;
/// Public exponent paired with [`DEFAULT_MODULUS`]
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 7;
/// Private exponent paired with [`DEFAULT_MODULUS`]
pub const DEFAULT_PRIVATE_EXPONENT: u64 = 103;

/// Letters that decrypt back to themselves under the default key pair
pub const ROUND_TRIP_LETTERS: [char; 13] = [
    'A', 'B', 'D', 'E', 'F', 'H', 'K', 'L', 'M', 'Q', 'V', 'W', 'X',
];

/// Toy RSA over letter indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToyRsa {
    modulus: u64,
    exponent: u64,
}

impl ToyRsa {
    /// Parses `n, exponent`; extra numbers are ignored
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let numbers = alphabet::integers(key);
        let [n, exponent, ..] = numbers[..] else {
            return Err(CipherError::key_format(
                CipherId::Rsa,
                format!(
                    "key must be 2 numbers: n, exponent (e.g. 143, 7), got {}",
                    numbers.len()
                ),
            ));
        };
        if n < 2 {
            return Err(CipherError::key_constraint(
                CipherId::Rsa,
                format!("modulus {n} must be at least 2"),
            ));
        }
        let exponent = u64::try_from(exponent).map_err(|_| {
            CipherError::key_constraint(
                CipherId::Rsa,
                format!("exponent {exponent} must not be negative"),
            )
        })?;
        Ok(Self {
            modulus: n.unsigned_abs(),
            exponent,
        })
    }

    /// Modulus `n`
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Exponent in use
    pub const fn exponent(&self) -> u64 {
        self.exponent
    }

    /// Raw `m^e mod n`, before folding into the alphabet
    pub fn power(&self, m: u64) -> u64 {
        math::mod_pow(m, self.exponent, self.modulus)
    }

    /// Transforms a letter index
    pub fn transform_index(&self, m: i64) -> i64 {
        let folded = self.power(m.unsigned_abs()) % 26;
        i64::try_from(folded).unwrap_or_default()
    }

    fn run(&self, text: &str) -> String {
        text.chars()
            .map(|c| alphabet::map_letter(c, |m| self.transform_index(m)))
            .collect()
    }
}

impl ClassicalCipher for ToyRsa {
    fn id(&self) -> CipherId {
        CipherId::Rsa
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.run(text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.run(text))
    }
}
