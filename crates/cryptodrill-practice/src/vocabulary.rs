//! Word lists and random text for drafted questions

use rand::RngExt;
use rand::rngs::StdRng;

/// Plaintext vocabulary
pub const COMMON_WORDS: [&str; 20] = [
    "HELLO",
    "WORLD",
    "CRYPTO",
    "SECRET",
    "MESSAGE",
    "CIPHER",
    "ENCODE",
    "DECODE",
    "PRACTICE",
    "LEARNING",
    "CHALLENGE",
    "PUZZLE",
    "SOLVE",
    "ANSWER",
    "KEY",
    "TEXT",
    "PLAIN",
    "CODE",
    "BREAK",
    "CRACK",
];

/// Keywords for the keyword-driven ciphers
pub const KEY_PHRASES: [&str; 10] = [
    "SECRETKEY",
    "PASSWORD",
    "MYKEY",
    "CIPHERKEY",
    "ENCRYPTION",
    "DECRYPTION",
    "PRACTICE",
    "LEARNING",
    "CHALLENGE",
    "PUZZLE",
];

/// Spanish plaintext vocabulary for the Xenocrypt
pub const SPANISH_WORDS: [&str; 16] = [
    "AÑO",
    "NIÑO",
    "MAÑANA",
    "ESPAÑA",
    "SEÑOR",
    "MONTAÑA",
    "CIFRADO",
    "SECRETO",
    "MENSAJE",
    "CLAVE",
    "PALABRA",
    "HOLA",
    "MUNDO",
    "SUEÑO",
    "PEQUEÑO",
    "LLAVE",
];

fn pick<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
    words[rng.random_range(0..words.len())]
}

/// One word from [`COMMON_WORDS`]
pub fn word(rng: &mut StdRng) -> &'static str {
    pick(rng, &COMMON_WORDS)
}

/// One keyword from [`KEY_PHRASES`]
pub fn key_phrase(rng: &mut StdRng) -> &'static str {
    pick(rng, &KEY_PHRASES)
}

/// Between `min` and `max` words (inclusive) joined with spaces
pub fn phrase(rng: &mut StdRng, min: usize, max: usize) -> String {
    let count = rng.random_range(min..=max);
    (0..count).map(|_| word(rng)).collect::<Vec<_>>().join(" ")
}

/// Between `min` and `max` Spanish words joined with spaces
pub fn spanish_phrase(rng: &mut StdRng, min: usize, max: usize) -> String {
    let count = rng.random_range(min..=max);
    (0..count)
        .map(|_| pick(rng, &SPANISH_WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `len` letters drawn uniformly from `letters`
pub fn random_letters(rng: &mut StdRng, letters: &[char], len: usize) -> String {
    (0..len)
        .map(|_| letters[rng.random_range(0..letters.len())])
        .collect()
}
