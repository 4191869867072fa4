//! Number theory helpers shared by the numeric ciphers
//!
//! All helpers are pure and work on small operands; `mod_pow` widens to
//! `u128` for the intermediate products so any `u64` modulus is safe.

/// Greatest common divisor (always non-negative)
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Whether `a` and `m` share no common factor
pub fn is_coprime(a: i64, m: i64) -> bool {
    gcd(a, m) == 1
}

/// Modular inverse of `a` modulo `m` by scanning `[1, m)`
///
/// Returns `None` when `a` has no inverse, i.e. `gcd(a, m) != 1`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m < 2 {
        return None;
    }
    let a = a.rem_euclid(m);
    (1..m).find(|x| (a * x) % m == 1)
}

/// `base^exp mod modulus` by square-and-multiply
///
/// A modulus of 1 yields 0; a modulus of 0 is treated as 1.
pub fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    if modulus <= 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut result: u128 = 1;
    let mut base = u128::from(base) % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        exp >>= 1;
        base = base * base % m;
    }
    result as u64
}
