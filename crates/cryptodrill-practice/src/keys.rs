//! Random key drawing for drafted questions
//!
//! Every function returns the key in the textual form a learner would type,
//! so the same string can be shown in the prompt and passed to the
//! transform library.

use cryptodrill_ciphers::math;
use rand::RngExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Affine multipliers: the units modulo 26
pub const AFFINE_MULTIPLIERS: [i64; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Caesar shift in `1..=25`
pub fn shift(rng: &mut StdRng) -> i64 {
    rng.random_range(1..=25)
}

/// Random permutation of `alphabet`
pub fn permutation(rng: &mut StdRng, alphabet: &[char]) -> String {
    let mut letters = alphabet.to_vec();
    letters.shuffle(rng);
    letters.into_iter().collect()
}

/// Affine pair `a, b` with `a` a unit mod 26
pub fn affine(rng: &mut StdRng) -> (i64, i64) {
    let a = AFFINE_MULTIPLIERS[rng.random_range(0..AFFINE_MULTIPLIERS.len())];
    let b = rng.random_range(0..26);
    (a, b)
}

/// Hill 2×2 matrix whose determinant is a unit mod 26.
///
/// Draws at most `attempts` candidates and returns `None` if none of them
/// is invertible.
pub fn hill2(rng: &mut StdRng, attempts: u32) -> Option<[i64; 4]> {
    (0..attempts).find_map(|_| {
        let m: [i64; 4] = std::array::from_fn(|_| rng.random_range(0..26));
        let det = (m[0] * m[3] - m[1] * m[2]).rem_euclid(26);
        math::is_coprime(det, 26).then_some(m)
    })
}

/// Nine entries for a Hill 3×3 matrix; no invertibility requirement
pub fn hill3(rng: &mut StdRng) -> [i64; 9] {
    std::array::from_fn(|_| rng.random_range(0..26))
}

/// Railfence rail count in `2..=5`
pub fn rails(rng: &mut StdRng) -> i64 {
    rng.random_range(2..=5)
}

/// Nine distinct digits for a Morbit key
pub fn morbit(rng: &mut StdRng) -> String {
    let mut digits: Vec<char> = ('0'..='9').collect();
    digits.shuffle(rng);
    digits.into_iter().take(9).collect()
}

/// Space separated numbers, the form the matrix ciphers accept
pub fn numbers(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
