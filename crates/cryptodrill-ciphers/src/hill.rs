//! Hill matrix ciphers
//!
//! Text is reduced to uppercase letters, padded with `X` to a whole number
//! of blocks, and each block of letter indices is multiplied by the key
//! matrix modulo 26. The 2×2 variant validates that its determinant is a
//! unit mod 26 and can decrypt with the inverse matrix; the 3×3 variant is
//! encrypt-only.

use crate::alphabet::{self, PAD};
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;
use crate::math;

/// Square key matrix with entries in `0..26`
pub type Matrix<const N: usize> = [[i64; N]; N];

/// Letter indices of `text` split into blocks of `N`, padded with `X`
pub fn blocks<const N: usize>(text: &str) -> Vec<[i64; N]> {
    let mut indices: Vec<i64> = text
        .chars()
        .filter_map(alphabet::index_of)
        .map(i64::from)
        .collect();
    let pad = i64::from(PAD as u8 - b'A');
    while indices.len() % N != 0 {
        indices.push(pad);
    }
    indices
        .chunks_exact(N)
        .map(|chunk| {
            let mut block = [0; N];
            block.copy_from_slice(chunk);
            block
        })
        .collect()
}

/// `matrix · block mod 26`
pub fn multiply<const N: usize>(matrix: &Matrix<N>, block: &[i64; N]) -> [i64; N] {
    let mut out = [0; N];
    for (row, value) in matrix.iter().zip(out.iter_mut()) {
        *value = row
            .iter()
            .zip(block)
            .map(|(m, x)| m * x)
            .sum::<i64>()
            .rem_euclid(26);
    }
    out
}

fn parse_matrix<const N: usize>(cipher: CipherId, key: &str) -> Result<Matrix<N>, CipherError> {
    let numbers = alphabet::integers(key);
    if numbers.len() != N * N {
        return Err(CipherError::key_format(
            cipher,
            format!(
                "key must be {} numbers ({N}x{N} matrix), got {}",
                N * N,
                numbers.len()
            ),
        ));
    }
    let mut matrix = [[0; N]; N];
    for (i, value) in numbers.into_iter().enumerate() {
        matrix[i / N][i % N] = value.rem_euclid(26);
    }
    Ok(matrix)
}

fn apply_blocks<const N: usize>(matrix: &Matrix<N>, text: &str) -> String {
    blocks::<N>(text)
        .iter()
        .flat_map(|block| multiply(matrix, block))
        .map(alphabet::letter)
        .collect()
}

/// Hill cipher with a 2×2 key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill2 {
    matrix: Matrix<2>,
    inverse: Matrix<2>,
    determinant: i64,
}

impl Hill2 {
    /// Parses four integers `a b c d` into `[[a, b], [c, d]]`.
    ///
    /// The determinant must be coprime with 26.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let matrix = parse_matrix::<2>(CipherId::Hill2x2, key)?;
        let [[a, b], [c, d]] = matrix;
        let determinant = (a * d - b * c).rem_euclid(26);
        let inv_det = math::mod_inverse(determinant, 26).ok_or_else(|| {
            CipherError::key_constraint(
                CipherId::Hill2x2,
                format!("determinant {determinant} must be coprime with 26"),
            )
        })?;
        let inverse = [
            [(d * inv_det).rem_euclid(26), (-b * inv_det).rem_euclid(26)],
            [(-c * inv_det).rem_euclid(26), (a * inv_det).rem_euclid(26)],
        ];
        Ok(Self {
            matrix,
            inverse,
            determinant,
        })
    }

    /// Key matrix
    pub const fn matrix(&self) -> &Matrix<2> {
        &self.matrix
    }

    /// Inverse key matrix mod 26
    pub const fn inverse(&self) -> &Matrix<2> {
        &self.inverse
    }

    /// Determinant mod 26
    pub const fn determinant(&self) -> i64 {
        self.determinant
    }
}

impl ClassicalCipher for Hill2 {
    fn id(&self) -> CipherId {
        CipherId::Hill2x2
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(apply_blocks(&self.matrix, text))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(apply_blocks(&self.inverse, text))
    }
}

/// Hill cipher with a 3×3 key (encrypt only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill3 {
    matrix: Matrix<3>,
}

impl Hill3 {
    /// Parses nine integers in row-major order. No invertibility check is made.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            matrix: parse_matrix::<3>(CipherId::Hill3x3, key)?,
        })
    }

    /// Key matrix
    pub const fn matrix(&self) -> &Matrix<3> {
        &self.matrix
    }
}

impl ClassicalCipher for Hill3 {
    fn id(&self) -> CipherId {
        CipherId::Hill3x3
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(apply_blocks(&self.matrix, text))
    }
}
