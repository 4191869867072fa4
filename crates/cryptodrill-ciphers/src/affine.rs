//! Affine cipher: `E(x) = (a·x + b) mod 26`, `D(y) = a⁻¹·(y − b) mod 26`

use crate::alphabet;
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;
use crate::math;

/// Affine cipher with `gcd(a, 26) = 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    a: i64,
    b: i64,
    a_inverse: i64,
}

impl Affine {
    /// Parses exactly two integers `a, b`
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let numbers = alphabet::integers(key);
        let [a, b] = numbers[..] else {
            return Err(CipherError::key_format(
                CipherId::Affine,
                format!(
                    "key must be 2 numbers: a, b (where gcd(a,26)=1), got {}",
                    numbers.len()
                ),
            ));
        };
        Self::with_parts(a, b)
    }

    /// Builds the cipher from its coefficients, reduced modulo 26
    pub fn with_parts(a: i64, b: i64) -> Result<Self, CipherError> {
        let a_inverse = math::mod_inverse(a, 26).ok_or_else(|| {
            CipherError::key_constraint(CipherId::Affine, format!("a = {a} must be coprime with 26"))
        })?;
        Ok(Self {
            a: a.rem_euclid(26),
            b: b.rem_euclid(26),
            a_inverse,
        })
    }

    /// Multiplier `a` in `0..26`
    pub const fn a(&self) -> i64 {
        self.a
    }

    /// Offset `b` in `0..26`
    pub const fn b(&self) -> i64 {
        self.b
    }

    /// `a⁻¹ mod 26`
    pub const fn a_inverse(&self) -> i64 {
        self.a_inverse
    }

    /// Encrypts a letter index
    pub const fn encrypt_index(&self, x: i64) -> i64 {
        (self.a * x + self.b).rem_euclid(26)
    }

    /// Decrypts a letter index
    pub const fn decrypt_index(&self, y: i64) -> i64 {
        (self.a_inverse * (y - self.b)).rem_euclid(26)
    }
}

impl ClassicalCipher for Affine {
    fn id(&self) -> CipherId {
        CipherId::Affine
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .chars()
            .map(|c| alphabet::map_letter(c, |x| self.encrypt_index(x)))
            .collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(text
            .chars()
            .map(|c| alphabet::map_letter(c, |y| self.decrypt_index(y)))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_affine_known_vector() {
        let affine = Affine::new("5, 8").unwrap();
        assert_eq!(affine.encrypt("A").unwrap(), "I");
        assert_eq!(affine.encrypt("AFFINE cipher").unwrap(), "IHHWVC swfrcp");
        assert_eq!(affine.decrypt("IHHWVC swfrcp").unwrap(), "AFFINE cipher");
    }

    #[test]
    fn test_affine_extreme_coefficients() {
        let affine = Affine::new("9223372036854775807, 0").unwrap();
        assert_eq!(affine.a(), 7);
        assert_eq!(affine.encrypt("Z").unwrap(), "T");
        assert_eq!(affine.decrypt("T").unwrap(), "Z");

        let affine = Affine::new("5, -9223372036854775808").unwrap();
        assert_eq!(affine.b(), 18);
        assert_eq!(affine.decrypt("A").unwrap(), "M");
        assert_eq!(affine.encrypt("M").unwrap(), "A");
    }

    #[test]
    fn test_affine_rejects_non_unit() {
        for a in [0, 2, 13, 26] {
            let err = Affine::with_parts(a, 1).unwrap_err();
            assert!(matches!(err, CipherError::KeyConstraint { .. }), "a = {a}");
        }
    }

    #[test]
    fn test_affine_arity() {
        assert!(matches!(
            Affine::new("5"),
            Err(CipherError::KeyFormat { .. })
        ));
        assert!(matches!(
            Affine::new("5 8 1"),
            Err(CipherError::KeyFormat { .. })
        ));
    }

    #[test]
    fn test_affine_index_round_trip() {
        for a in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25] {
            let affine = Affine::with_parts(a, 31).unwrap();
            for x in 0..26 {
                assert_eq!(affine.decrypt_index(affine.encrypt_index(x)), x);
            }
        }
    }
}
