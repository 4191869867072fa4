//! Morse code and the Morse-derived ciphers
//!
//! A single International Morse table backs three ciphers:
//!
//! - [`Pollux`] rewrites the Morse stream as digits (`.`→1, `-`→2, gap→0)
//! - [`Morbit`] reads the stream two symbols at a time and replaces each
//!   pair with a key digit (encrypt only)
//! - [`FractionatedMorse`] reads the stream three symbols at a time and
//!   replaces each trigram with a key letter (encrypt only)
//!
//! In every stream `x` marks the gap between two letters.

use crate::catalog::CipherId;
use crate::cipher::ClassicalCipher;
use crate::error::CipherError;

/// Letter separator inside a Morse stream
pub const SEPARATOR: char = 'x';

/// International Morse code for letters and digits
pub const MORSE_TABLE: [(char, &str); 36] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Morse code for a letter (any case) or digit
pub fn encode_char(c: char) -> Option<&'static str> {
    let upper = c.to_ascii_uppercase();
    MORSE_TABLE
        .iter()
        .find(|(symbol, _)| *symbol == upper)
        .map(|(_, code)| *code)
}

/// Letter or digit for a Morse code
pub fn decode_code(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|(_, candidate)| *candidate == code)
        .map(|(symbol, _)| *symbol)
}

/// Codes of every character joined with [`SEPARATOR`].
///
/// Characters without a code contribute an empty code, so they still add a
/// separator.
pub fn joined_stream(text: &str) -> String {
    text.chars()
        .map(|c| encode_char(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("x")
}

/// Pollux: Morse stream written with the digits 1, 2 and 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Pollux;

impl Pollux {
    /// Digit for one Morse stream symbol
    pub const fn digit(symbol: char) -> char {
        match symbol {
            '.' => '1',
            '-' => '2',
            SEPARATOR => '0',
            other => other,
        }
    }

    /// Morse stream symbol for one digit
    pub const fn symbol(digit: char) -> Option<char> {
        match digit {
            '1' => Some('.'),
            '2' => Some('-'),
            '0' => Some(SEPARATOR),
            _ => None,
        }
    }
}

impl ClassicalCipher for Pollux {
    fn id(&self) -> CipherId {
        CipherId::Pollux
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(joined_stream(text).chars().map(Self::digit).collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let stream: String = text.chars().filter_map(Self::symbol).collect();
        Ok(stream
            .split(SEPARATOR)
            .filter(|code| !code.is_empty())
            .filter_map(decode_code)
            .collect())
    }
}

/// Morse symbol pairs in Morbit key order
pub const MORBIT_PAIRS: [&str; 9] = ["..", ".-", ".x", "-.", "--", "-x", "x.", "x-", "xx"];

/// Morbit: pairs of Morse symbols replaced with key digits (encrypt only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morbit {
    digits: [char; 9],
}

impl Morbit {
    /// Uses the first nine digits found in `key`
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let found: Vec<char> = key.chars().filter(char::is_ascii_digit).collect();
        let digits: [char; 9] = found
            .get(..9)
            .and_then(|d| d.try_into().ok())
            .ok_or_else(|| {
                CipherError::key_format(
                    CipherId::Morbit,
                    format!("key must be 9 digits, got {}", found.len()),
                )
            })?;
        Ok(Self { digits })
    }

    /// Key digit assigned to each entry of [`MORBIT_PAIRS`]
    pub const fn digits(&self) -> &[char; 9] {
        &self.digits
    }

    /// Morse stream cut into two-symbol windows, the last one padded with `x`
    pub fn windows(text: &str) -> Vec<String> {
        let stream: Vec<char> = joined_stream(text).chars().collect();
        stream
            .chunks(2)
            .map(|chunk| {
                let mut pair: String = chunk.iter().collect();
                if pair.len() < 2 {
                    pair.push(SEPARATOR);
                }
                pair
            })
            .collect()
    }

    /// Key digit for a two-symbol window
    pub fn digit_for(&self, pair: &str) -> Option<char> {
        MORBIT_PAIRS
            .iter()
            .position(|candidate| *candidate == pair)
            .map(|index| self.digits[index])
    }
}

impl ClassicalCipher for Morbit {
    fn id(&self) -> CipherId {
        CipherId::Morbit
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::windows(text)
            .iter()
            .filter_map(|pair| self.digit_for(pair))
            .collect())
    }
}

/// Fractionated Morse: Morse trigrams replaced with key letters (encrypt only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionatedMorse {
    key: Vec<char>,
}

impl FractionatedMorse {
    /// Minimum number of key letters
    pub const MIN_KEY_LETTERS: usize = 9;

    /// Uses the letters of `key`, at least nine of them
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key: Vec<char> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if key.len() < Self::MIN_KEY_LETTERS {
            return Err(CipherError::key_format(
                CipherId::FractionatedMorse,
                format!("key must be at least 9 letters, got {}", key.len()),
            ));
        }
        Ok(Self { key })
    }

    /// Key letters
    pub fn key(&self) -> &[char] {
        &self.key
    }

    /// Morse stream where every letter or digit is followed by `x` and
    /// any other character (spaces, punctuation) becomes `xx`
    pub fn morse_stream(text: &str) -> String {
        let mut stream = String::new();
        for c in text.chars() {
            if let Some(code) = encode_char(c) {
                stream.push_str(code);
                stream.push(SEPARATOR);
            } else {
                stream.push(SEPARATOR);
                stream.push(SEPARATOR);
            }
        }
        stream
    }

    /// Stream cut into three-symbol groups, the last one padded with `x`
    pub fn trigrams(text: &str) -> Vec<String> {
        let stream: Vec<char> = Self::morse_stream(text).chars().collect();
        stream
            .chunks(3)
            .map(|chunk| {
                let mut trigram: String = chunk.iter().collect();
                while trigram.len() < 3 {
                    trigram.push(SEPARATOR);
                }
                trigram
            })
            .collect()
    }

    /// Base-3 value of a trigram with `.`=0, `-`=1, `x`=2
    pub fn trigram_index(trigram: &str) -> usize {
        trigram.chars().fold(0, |acc, symbol| {
            let digit = match symbol {
                '.' => 0,
                '-' => 1,
                _ => 2,
            };
            acc * 3 + digit
        })
    }

    /// Key letter substituted for a trigram
    pub fn letter_for(&self, trigram: &str) -> char {
        self.key[Self::trigram_index(trigram) % self.key.len()]
    }
}

impl ClassicalCipher for FractionatedMorse {
    fn id(&self) -> CipherId {
        CipherId::FractionatedMorse
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::trigrams(text)
            .iter()
            .map(|trigram| self.letter_for(trigram))
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::Direction;

    #[test]
    fn test_morse_table_is_bijective() {
        for (symbol, code) in MORSE_TABLE {
            assert_eq!(encode_char(symbol), Some(code));
            assert_eq!(decode_code(code), Some(symbol));
        }
        assert_eq!(encode_char('s'), Some("..."));
        assert_eq!(encode_char('!'), None);
        assert_eq!(decode_code("......."), None);
    }

    #[test]
    fn test_joined_stream() {
        assert_eq!(joined_stream("SOS"), "...x---x...");
        assert_eq!(joined_stream("A B"), ".-xx-...");
    }

    #[test]
    fn test_pollux_known_vector() {
        assert_eq!(Pollux.encrypt("SOS").unwrap(), "11102220111");
        assert_eq!(Pollux.decrypt("11102220111").unwrap(), "SOS");
    }

    #[test]
    fn test_pollux_decrypt_ignores_noise() {
        assert_eq!(Pollux.decrypt("111 0 222-0 111").unwrap(), "SOS");
        assert_eq!(Pollux.decrypt("0001200").unwrap(), "A");
    }

    #[test]
    fn test_morbit_windows() {
        // "ONE" = ---x-.x.
        assert_eq!(Morbit::windows("ONE"), vec!["--", "-x", "-.", "x."]);
        assert_eq!(Morbit::windows("E"), vec![".x"]);
    }

    #[test]
    fn test_morbit_encrypt() {
        let morbit = Morbit::new("123456789").unwrap();
        assert_eq!(morbit.digits(), &['1', '2', '3', '4', '5', '6', '7', '8', '9']);
        assert_eq!(morbit.encrypt("ONE").unwrap(), "5647");
        assert!(matches!(
            morbit.apply("5647", Direction::Decrypt),
            Err(CipherError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_morbit_key_needs_nine_digits() {
        assert!(matches!(
            Morbit::new("12345678"),
            Err(CipherError::KeyFormat { .. })
        ));
        let morbit = Morbit::new("9-8-7-6-5-4-3-2-1-0").unwrap();
        assert_eq!(morbit.digits()[0], '9');
        assert_eq!(morbit.digits()[8], '1');
    }

    #[test]
    fn test_fractionated_stream_and_trigrams() {
        assert_eq!(
            FractionatedMorse::morse_stream("HI THERE!"),
            "....x..xxx-x....x.x.-.x.xxx"
        );
        assert_eq!(FractionatedMorse::morse_stream("A B"), ".-xxx-...x");
        assert_eq!(FractionatedMorse::trigrams("E"), vec![".xx"]);
    }

    #[test]
    fn test_trigram_index_is_ternary() {
        assert_eq!(FractionatedMorse::trigram_index("..."), 0);
        assert_eq!(FractionatedMorse::trigram_index("..-"), 1);
        assert_eq!(FractionatedMorse::trigram_index("..x"), 2);
        assert_eq!(FractionatedMorse::trigram_index("-.."), 9);
        assert_eq!(FractionatedMorse::trigram_index("xxx"), 26);
    }

    #[test]
    fn test_fractionated_encrypt() {
        let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let fm = FractionatedMorse::new(alphabet).unwrap();
        // "E" -> ".xx" -> 0*9 + 2*3 + 2 = 8 -> I
        assert_eq!(fm.encrypt("E").unwrap(), "I");
        // "SOS" -> "...x---x...x" -> "...", "x--", "-x.", "..x"
        assert_eq!(fm.encrypt("SOS").unwrap(), "AWPC");
        // "A B" -> ".-xxx-...x" -> ".-x", "xx-", "...", "xxx"
        assert_eq!(fm.encrypt("A B").unwrap(), "FZAA");
    }

    #[test]
    fn test_fractionated_short_key() {
        assert!(matches!(
            FractionatedMorse::new("SHORT"),
            Err(CipherError::KeyFormat { .. })
        ));
    }
}
