//! Transposition ciphers: railfence and complete columnar
//!
//! Both ciphers reorder characters without changing them. Every character
//! takes part, including spaces and punctuation.

use crate::alphabet::{self, PAD};
use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;

/// Zigzag transposition over a number of rails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Railfence {
    rails: usize,
}

impl Railfence {
    /// Rails used when the key does not contain a number
    pub const DEFAULT_RAILS: usize = 3;

    /// Parses the rail count; an empty, zero or non-numeric key means three
    /// rails
    pub fn new(key: &str) -> Result<Self, CipherError> {
        match alphabet::leading_integer(key) {
            None | Some(0) => Ok(Self {
                rails: Self::DEFAULT_RAILS,
            }),
            Some(n) => Self::with_rails(n),
        }
    }

    /// Cipher with an explicit rail count (at least 2)
    pub fn with_rails(rails: i64) -> Result<Self, CipherError> {
        match usize::try_from(rails) {
            Ok(rails) if rails >= 2 => Ok(Self { rails }),
            _ => Err(CipherError::key_constraint(
                CipherId::Railfence,
                format!("rails must be at least 2, got {rails}"),
            )),
        }
    }

    /// Number of rails
    pub const fn rails(&self) -> usize {
        self.rails
    }

    /// Rail index of each position for a message of `len` characters
    pub fn rail_pattern(&self, len: usize) -> Vec<usize> {
        let mut pattern = Vec::with_capacity(len);
        let mut rail = 0usize;
        let mut descending = true;
        for _ in 0..len {
            pattern.push(rail);
            if rail == 0 {
                descending = true;
            } else if rail == self.rails - 1 {
                descending = false;
            }
            if descending {
                rail += 1;
            } else {
                rail -= 1;
            }
        }
        pattern
    }

    /// Rails a message of `len` characters can reach
    fn used_rails(&self, len: usize) -> usize {
        self.rails.min(len.max(1))
    }

    /// Characters of `text` grouped by rail, top to bottom.
    ///
    /// Rails the zigzag never reaches are left out.
    pub fn fence(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut rows = vec![String::new(); self.used_rails(chars.len())];
        for (c, rail) in chars.iter().zip(self.rail_pattern(chars.len())) {
            rows[rail].push(*c);
        }
        rows
    }
}

impl ClassicalCipher for Railfence {
    fn id(&self) -> CipherId {
        CipherId::Railfence
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(self.fence(text).concat())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let pattern = self.rail_pattern(chars.len());

        let mut lengths = vec![0usize; self.used_rails(chars.len())];
        for &rail in &pattern {
            lengths[rail] += 1;
        }

        let mut rows: Vec<std::slice::Iter<'_, char>> = Vec::with_capacity(lengths.len());
        let mut start = 0;
        for len in lengths {
            rows.push(chars[start..start + len].iter());
            start += len;
        }

        Ok(pattern
            .into_iter()
            .filter_map(|rail| rows[rail].next().copied())
            .collect())
    }
}

/// Columnar transposition with a keyword
///
/// The message is written row by row under the keyword and read off column
/// by column in alphabetical order of the key letters. Repeated key letters
/// keep their left-to-right order. Encryption pads the last row with `X`;
/// decryption strips every trailing `X`, so a plaintext that genuinely ends
/// in `X` loses those letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteColumnar {
    key: String,
    order: Vec<usize>,
}

impl CompleteColumnar {
    /// Builds the column order from the letters of `key`
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key = alphabet::ascii_letters(key);
        if key.is_empty() {
            return Err(CipherError::key_format(
                CipherId::CompleteColumnar,
                "key must contain at least one letter",
            ));
        }
        let letters: Vec<char> = key.chars().collect();
        let mut order: Vec<usize> = (0..letters.len()).collect();
        order.sort_by_key(|&i| (letters[i], i));
        Ok(Self { key, order })
    }

    /// Normalised key letters
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Column indices in reading order
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.order.len()
    }

    /// The padded grid `text` is written into, one string per row
    pub fn grid(&self, text: &str) -> Vec<String> {
        let mut chars: Vec<char> = text.chars().collect();
        let columns = self.columns();
        while chars.len() % columns != 0 {
            chars.push(PAD);
        }
        chars
            .chunks(columns)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl ClassicalCipher for CompleteColumnar {
    fn id(&self) -> CipherId {
        CipherId::CompleteColumnar
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let rows: Vec<Vec<char>> = self
            .grid(text)
            .iter()
            .map(|row| row.chars().collect())
            .collect();
        let mut out = String::with_capacity(rows.len() * self.columns());
        for &column in &self.order {
            out.extend(rows.iter().map(|row| row[column]));
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let columns = self.columns();
        let rows = chars.len().div_ceil(columns);
        let full_columns = match chars.len() % columns {
            0 => columns,
            n => n,
        };

        let mut cells: Vec<Option<char>> = vec![None; rows * columns];
        let mut source = chars.into_iter();
        for &column in &self.order {
            let height = if column < full_columns {
                rows
            } else {
                rows.saturating_sub(1)
            };
            for row in 0..height {
                cells[row * columns + column] = source.next();
            }
        }

        let plain: String = cells.into_iter().flatten().collect();
        Ok(plain.trim_end_matches(PAD).to_string())
    }
}
