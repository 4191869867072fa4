//! Alphabet and key-grammar helpers shared by the letter ciphers

/// The Latin alphabet
pub const LATIN: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The Spanish alphabet used by the Xenocrypt (Ñ follows N)
pub const SPANISH: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Padding letter used by the block and grid ciphers
pub const PAD: char = 'X';

/// 0-based index of an ASCII letter, ignoring case
pub fn index_of(c: char) -> Option<u8> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_uppercase() as u8 - b'A')
}

/// Uppercase letter for `index`, reduced modulo 26
pub fn letter(index: i64) -> char {
    char::from(b'A' + index.rem_euclid(26) as u8)
}

/// Applies `f` to the index of an ASCII letter and keeps its case.
///
/// Characters that are not ASCII letters are returned unchanged.
pub fn map_letter(c: char, f: impl FnOnce(i64) -> i64) -> char {
    match index_of(c) {
        Some(i) => {
            let mapped = letter(f(i64::from(i)));
            if c.is_ascii_lowercase() {
                mapped.to_ascii_lowercase()
            } else {
                mapped
            }
        }
        None => c,
    }
}

/// Unicode-aware single character upper-casing (`ñ` -> `Ñ`)
pub fn to_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Unicode-aware single character lower-casing (`Ñ` -> `ñ`)
pub fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Uppercase ASCII letters of `text`; everything else is dropped
pub fn ascii_letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Integers separated by commas and/or whitespace.
///
/// Tokens that do not parse as integers are skipped.
pub fn integers(key: &str) -> Vec<i64> {
    key.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Leading integer of `key` (optional sign then digits), ignoring
/// surrounding whitespace and any trailing text.
pub fn leading_integer(key: &str) -> Option<i64> {
    let trimmed = key.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_letter() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('z'), Some(25));
        assert_eq!(index_of('Ñ'), None);
        assert_eq!(index_of(' '), None);
        assert_eq!(letter(27), 'B');
        assert_eq!(letter(-1), 'Z');
    }

    #[test]
    fn test_map_letter_preserves_case() {
        assert_eq!(map_letter('a', |i| i + 1), 'b');
        assert_eq!(map_letter('Z', |i| i + 1), 'A');
        assert_eq!(map_letter('!', |i| i + 1), '!');
    }

    #[test]
    fn test_unicode_case() {
        assert_eq!(to_upper('ñ'), 'Ñ');
        assert_eq!(to_lower('Ñ'), 'ñ');
        assert_eq!(to_upper('7'), '7');
    }

    #[test]
    fn test_integers() {
        assert_eq!(integers("2 1 3 4"), vec![2, 1, 3, 4]);
        assert_eq!(integers("5,8"), vec![5, 8]);
        assert_eq!(integers(" 143 ,  7 "), vec![143, 7]);
        assert_eq!(integers("a, 3, -2, x"), vec![3, -2]);
        assert!(integers("").is_empty());
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer("  -7 rails"), Some(-7));
        assert_eq!(leading_integer("+4"), Some(4));
        assert_eq!(leading_integer("12abc"), Some(12));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
    }
}
