//! Worked explanations of a transform
//!
//! [`explain`] replays the arithmetic of a transform one character (or
//! block, or Morse group) at a time. It only reads its inputs; the text
//! shown as the result is the one the caller passed in.

use std::fmt;

use cryptodrill_ciphers::alphabet::{self, LATIN};
use cryptodrill_ciphers::morse::{self, MORBIT_PAIRS};
use cryptodrill_ciphers::{
    Affine, AtBash, Baconian, Caesar, CipherError, CipherId, ClassicalCipher, CompleteColumnar,
    Cryptarithm, DancingMen, Direction, FractionatedMorse, Hill2, Hill3, Morbit, Pollux, Porta,
    Railfence, RunningKey, Substitution, ToyRsa,
};
use serde::{Deserialize, Serialize};

/// A titled list of steps ending in a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// Heading, e.g. "Caesar Cipher: decrypt"
    pub title: String,
    /// One line per step
    pub steps: Vec<String>,
    /// Output of the transform
    pub result: String,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for step in &self.steps {
            writeln!(f, "  {step}")?;
        }
        write!(f, "Result: {}", self.result)
    }
}

type Steps = Result<Vec<String>, CipherError>;

/// Explains how `plaintext` and `ciphertext` are related under `cipher`
/// and `key` in `direction`.
///
/// A key the cipher rejects produces an explanation that says so.
pub fn explain(
    cipher: CipherId,
    key: &str,
    plaintext: &str,
    ciphertext: &str,
    direction: Direction,
) -> Explanation {
    let (input, result) = match direction {
        Direction::Encrypt => (plaintext, ciphertext),
        Direction::Decrypt => (ciphertext, plaintext),
    };

    let steps = trace(cipher, key, input, direction).unwrap_or_else(|e| match e {
        CipherError::KeyFormat { reason, .. } | CipherError::KeyConstraint { reason, .. } => {
            vec![format!("The key {key:?} is invalid: {reason}")]
        }
        other => vec![other.to_string()],
    });

    Explanation {
        title: format!("{}: {direction}", cipher.spec().name),
        steps,
        result: result.to_string(),
    }
}

fn trace(cipher: CipherId, key: &str, input: &str, direction: Direction) -> Steps {
    let encrypt = direction == Direction::Encrypt;
    match cipher {
        CipherId::Atbash => Ok(atbash(input)),
        CipherId::Caesar => Ok(caesar(&Caesar::new(key), input, encrypt)),
        CipherId::Aristocrat
        | CipherId::AristocratMisspelled
        | CipherId::Patristocrat
        | CipherId::Xenocrypt => Ok(substitution(&Substitution::new(cipher, key)?, input, encrypt)),
        CipherId::Hill2x2 => Ok(hill2(&Hill2::new(key)?, input, encrypt)),
        CipherId::Hill3x3 => Ok(hill3(&Hill3::new(key)?, input, encrypt)),
        CipherId::Affine => Ok(affine(&Affine::new(key)?, input, encrypt)),
        CipherId::Baconian => Ok(baconian(input, encrypt)),
        CipherId::FractionatedMorse => fractionated_morse(key, input, encrypt),
        CipherId::Porta => Ok(porta(&Porta::new(key)?, input)),
        CipherId::DancingMen => Ok(dancing_men(input, encrypt)),
        CipherId::Rsa => Ok(rsa(&ToyRsa::new(key)?, input, encrypt)),
        CipherId::RunningKey => Ok(running_key(&RunningKey::new(key)?, input, encrypt)),
        CipherId::Railfence => railfence(&Railfence::new(key)?, input, encrypt),
        CipherId::Cryptarithm => Ok(cryptarithm(&Cryptarithm::new(key), input, encrypt)),
        CipherId::CompleteColumnar => columnar(&CompleteColumnar::new(key)?, input, encrypt),
        CipherId::Pollux => Ok(pollux(input, encrypt)),
        CipherId::Morbit => morbit(key, input, encrypt),
    }
}

fn heading(encrypt: bool, input: &str) -> String {
    if encrypt {
        format!("Encrypting {input:?}:")
    } else {
        format!("Decrypting {input:?}:")
    }
}

/// One line per ASCII letter of `text`, given its uppercase form and index
fn per_letter(text: &str, mut line: impl FnMut(char, i64) -> String) -> Vec<String> {
    text.chars()
        .filter_map(|c| alphabet::index_of(c).map(|i| line(c.to_ascii_uppercase(), i64::from(i))))
        .collect()
}

fn atbash(input: &str) -> Vec<String> {
    let pairs: Vec<String> = LATIN[..13]
        .iter()
        .map(|&c| format!("{c}↔{}", AtBash::mirror(c)))
        .collect();
    let mut steps = vec![
        "Each letter is replaced with its mirror in the alphabet.".to_string(),
        format!("Pairs: {}", pairs.join(" ")),
        format!("Mirroring {input:?}:"),
    ];
    steps.extend(per_letter(input, |c, _| format!("{c} → {}", AtBash::mirror(c))));
    steps
}

fn caesar(cipher: &Caesar, input: &str, encrypt: bool) -> Vec<String> {
    let shift = cipher.shift();
    let mut steps = vec![format!("Shift amount: {shift}")];
    if encrypt {
        steps.push("Formula: E(x) = (x + shift) mod 26".to_string());
    } else {
        steps.push("Formula: D(x) = (x - shift) mod 26".to_string());
    }
    steps.push(heading(encrypt, input));
    steps.extend(per_letter(input, |c, x| {
        if encrypt {
            let y = (x + shift).rem_euclid(26);
            format!("{c} ({x}) + {shift} = {y} → {}", alphabet::letter(y))
        } else {
            let y = (x - shift).rem_euclid(26);
            format!("{c} ({x}) - {shift} = {y} → {}", alphabet::letter(y))
        }
    }));
    steps
}

fn substitution(cipher: &Substitution, input: &str, encrypt: bool) -> Vec<String> {
    let plain: String = cipher.plain_alphabet().iter().collect();
    let keyed: String = cipher.cipher_alphabet().iter().collect();
    let mut steps = if encrypt {
        vec![
            "Substitution table:".to_string(),
            format!("Plain:  {plain}"),
            format!("Cipher: {keyed}"),
        ]
    } else {
        vec![
            "Reverse substitution table:".to_string(),
            format!("Cipher: {keyed}"),
            format!("Plain:  {plain}"),
        ]
    };
    steps.push(heading(encrypt, input));
    for c in input.chars() {
        let upper = alphabet::to_upper(c);
        let known = if encrypt {
            cipher.plain_alphabet().contains(&upper)
        } else {
            cipher.cipher_alphabet().contains(&upper)
        };
        if known {
            let mapped = if encrypt {
                cipher.encrypt_char(upper)
            } else {
                cipher.decrypt_char(upper)
            };
            steps.push(format!("{upper} → {mapped}"));
        }
    }
    steps
}

fn matrix_rows<const N: usize>(matrix: &[[i64; N]; N]) -> Vec<String> {
    matrix
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            format!("[{}]", cells.join(" "))
        })
        .collect()
}

fn block_steps<const N: usize>(matrix: &[[i64; N]; N], input: &str) -> Vec<String> {
    cryptodrill_ciphers::hill::blocks::<N>(input)
        .iter()
        .map(|block| {
            let out = cryptodrill_ciphers::hill::multiply(matrix, block);
            let letters_in: String = block.iter().map(|&i| alphabet::letter(i)).collect();
            let letters_out: String = out.iter().map(|&i| alphabet::letter(i)).collect();
            let sums: Vec<String> = matrix
                .iter()
                .map(|row| {
                    let terms: Vec<String> = row
                        .iter()
                        .zip(block)
                        .map(|(m, x)| format!("{m}·{x}"))
                        .collect();
                    terms.join(" + ")
                })
                .collect();
            format!(
                "{letters_in} = {block:?} → [{}] mod 26 = {out:?} → {letters_out}",
                sums.join(", ")
            )
        })
        .collect()
}

fn hill2(cipher: &Hill2, input: &str, encrypt: bool) -> Vec<String> {
    let mut steps = vec!["Key matrix:".to_string()];
    steps.extend(matrix_rows(cipher.matrix()));
    steps.push(format!(
        "Determinant: {} (coprime with 26)",
        cipher.determinant()
    ));
    if encrypt {
        steps.push(heading(true, input));
        steps.extend(block_steps(cipher.matrix(), input));
    } else {
        steps.push("Inverse matrix mod 26:".to_string());
        steps.extend(matrix_rows(cipher.inverse()));
        steps.push(heading(false, input));
        steps.extend(block_steps(cipher.inverse(), input));
    }
    steps
}

fn hill3(cipher: &Hill3, input: &str, encrypt: bool) -> Vec<String> {
    let mut steps = vec!["Key matrix:".to_string()];
    steps.extend(matrix_rows(cipher.matrix()));
    if encrypt {
        steps.push("Multiply each 3-letter block by the matrix mod 26.".to_string());
        steps.push(heading(true, input));
        steps.extend(block_steps(cipher.matrix(), input));
    } else {
        steps.push(
            "Decryption multiplies each 3-letter block by the inverse of the matrix mod 26."
                .to_string(),
        );
    }
    steps
}

fn affine(cipher: &Affine, input: &str, encrypt: bool) -> Vec<String> {
    let (a, b) = (cipher.a(), cipher.b());
    let mut steps = vec![format!("Key: a = {a}, b = {b}")];
    if encrypt {
        steps.push("Formula: E(x) = (a·x + b) mod 26".to_string());
        steps.push(heading(true, input));
        steps.extend(per_letter(input, |c, x| {
            let y = cipher.encrypt_index(x);
            format!("{c}: ({a} × {x} + {b}) mod 26 = {y} → {}", alphabet::letter(y))
        }));
    } else {
        let a_inv = cipher.a_inverse();
        steps.push("Formula: D(y) = a⁻¹·(y - b) mod 26".to_string());
        steps.push(format!("a⁻¹ = {a_inv} (since {a} × {a_inv} ≡ 1 mod 26)"));
        steps.push(heading(false, input));
        steps.extend(per_letter(input, |c, y| {
            let x = cipher.decrypt_index(y);
            format!("{c}: {a_inv} × ({y} - {b}) mod 26 = {x} → {}", alphabet::letter(x))
        }));
    }
    steps
}

fn baconian(input: &str, encrypt: bool) -> Vec<String> {
    let mut steps = vec![
        "Each letter is a 5-symbol code of A and B (its index in binary).".to_string(),
        heading(encrypt, input),
    ];
    if encrypt {
        steps.extend(input.chars().filter_map(|c| {
            Baconian::code(c).map(|code| format!("{} → {code}", c.to_ascii_uppercase()))
        }));
    } else {
        steps.extend(input.split_whitespace().filter_map(|token| {
            Baconian::letter(token).map(|letter| format!("{} → {letter}", token.to_ascii_uppercase()))
        }));
    }
    steps
}

fn fractionated_morse(key: &str, input: &str, encrypt: bool) -> Steps {
    if !encrypt {
        return Ok(vec![
            "1. Replace each ciphertext letter with the trigram at its key position".to_string(),
            "2. Join the trigrams into a Morse stream".to_string(),
            "3. Split the stream on x and read each Morse letter".to_string(),
        ]);
    }
    let cipher = FractionatedMorse::new(key)?;
    let key_letters: String = cipher.key().iter().collect();
    let mut steps = vec![
        format!("Key letters: {key_letters}"),
        format!("Morse stream: {}", FractionatedMorse::morse_stream(input)),
        "Trigram value: base 3 with . = 0, - = 1, x = 2".to_string(),
    ];
    steps.extend(FractionatedMorse::trigrams(input).iter().map(|trigram| {
        let index = FractionatedMorse::trigram_index(trigram);
        format!(
            "{trigram} = {index}, {index} mod {} = {} → {}",
            cipher.key().len(),
            index % cipher.key().len(),
            cipher.letter_for(trigram)
        )
    }));
    Ok(steps)
}

fn porta(cipher: &Porta, input: &str) -> Vec<String> {
    let key: String = cipher
        .key()
        .iter()
        .map(|&k| alphabet::letter(i64::from(k)))
        .collect();
    let mut steps = vec![
        format!("Key: {key}"),
        "Each key letter selects the tableau row of its pair (AB, CD, ..., YZ).".to_string(),
        "The same row both encrypts and decrypts.".to_string(),
    ];
    let mut cursor = 0usize;
    steps.extend(per_letter(input, |c, p| {
        let k = i64::from(cipher.key()[cursor % cipher.key().len()]);
        cursor += 1;
        let row = k / 2;
        format!(
            "{c} with key {} (row {}{}): {c} → {}",
            alphabet::letter(k),
            alphabet::letter(row * 2),
            alphabet::letter(row * 2 + 1),
            alphabet::letter(Porta::tableau(k, p))
        )
    }));
    steps
}

fn dancing_men(input: &str, encrypt: bool) -> Vec<String> {
    let mut steps = vec![
        "Letter n of the alphabet is drawn as n figures.".to_string(),
        heading(encrypt, input),
    ];
    if encrypt {
        steps.extend(per_letter(input, |c, i| {
            let figure = DancingMen::figure(c).unwrap_or_default();
            format!("{c} ({}) → {figure}", i + 1)
        }));
    } else {
        steps.extend(input.split_whitespace().filter_map(|token| {
            DancingMen::letter(token)
                .map(|letter| format!("{} figures → {letter}", token.chars().count()))
        }));
    }
    steps
}

fn rsa(cipher: &ToyRsa, input: &str, encrypt: bool) -> Vec<String> {
    let n = cipher.modulus();
    let e = cipher.exponent();
    let (name, formula) = if encrypt {
        ("e", "Formula: c = (m^e mod n) mod 26")
    } else {
        ("d", "Formula: m = (c^d mod n) mod 26")
    };
    let mut steps = vec![
        format!("Key: n = {n}, {name} = {e}"),
        formula.to_string(),
        heading(encrypt, input),
    ];
    steps.extend(per_letter(input, |c, m| {
        let power = cipher.power(m.unsigned_abs());
        let out = cipher.transform_index(m);
        format!(
            "{c}: {m}^{e} mod {n} = {power}, {power} mod 26 = {out} → {}",
            alphabet::letter(out)
        )
    }));
    steps
}

fn running_key(cipher: &RunningKey, input: &str, encrypt: bool) -> Vec<String> {
    let key: String = cipher
        .key()
        .iter()
        .map(|&k| alphabet::letter(i64::from(k)))
        .collect();
    let mut steps = vec![
        format!("Key: {key}"),
        "Each letter is shifted by the next key letter; other characters keep the key in place."
            .to_string(),
        heading(encrypt, input),
    ];
    let mut cursor = 0usize;
    steps.extend(per_letter(input, |c, x| {
        let k = i64::from(cipher.key()[cursor % cipher.key().len()]);
        cursor += 1;
        let key_letter = alphabet::letter(k);
        if encrypt {
            format!("{c} + {key_letter}({k}) = {}", alphabet::letter(x + k))
        } else {
            format!("{c} - {key_letter}({k}) = {}", alphabet::letter(x - k))
        }
    }));
    steps
}

fn railfence(cipher: &Railfence, input: &str, encrypt: bool) -> Steps {
    let rails = cipher.rails();
    let mut steps = vec![
        format!("Number of rails: {rails}"),
        "Characters are written in a zigzag down and up the rails.".to_string(),
        heading(encrypt, input),
    ];
    if encrypt {
        for (i, rail) in cipher.fence(input).iter().enumerate() {
            steps.push(format!("Rail {}: {rail}", i + 1));
        }
        steps.push("Read the rails top to bottom.".to_string());
    } else {
        let plain = cipher.decrypt(input)?;
        let fence = cipher.fence(&plain);
        let lengths: Vec<String> = fence
            .iter()
            .map(|rail| rail.chars().count().to_string())
            .collect();
        steps.push(format!(
            "The zigzag over {} characters gives rail lengths {}",
            input.chars().count(),
            lengths.join(", ")
        ));
        for (i, rail) in fence.iter().enumerate() {
            steps.push(format!("Rail {}: {rail}", i + 1));
        }
        steps.push("Read along the zigzag, taking the next character of each rail.".to_string());
    }
    Ok(steps)
}

fn cryptarithm(cipher: &Cryptarithm, input: &str, encrypt: bool) -> Vec<String> {
    if encrypt {
        return vec!["A cryptarithm is a puzzle type and has no encryption direction.".to_string()];
    }
    let pairs: Vec<String> = LATIN
        .iter()
        .zip(cipher.mapping())
        .map(|(from, to)| format!("{from}→{to}"))
        .collect();
    let mut steps = vec![
        format!("Letter mapping: {}", pairs.join(" ")),
        heading(false, input),
    ];
    steps.extend(per_letter(input, |c, _| format!("{c} → {}", cipher.solve_char(c))));
    steps
}

fn columnar(cipher: &CompleteColumnar, input: &str, encrypt: bool) -> Steps {
    let key: Vec<char> = cipher.key().chars().collect();
    let order: Vec<String> = cipher
        .column_order()
        .iter()
        .map(|&col| format!("{}{}", key[col], col + 1))
        .collect();
    let mut steps = vec![
        format!("Key: {}", cipher.key()),
        format!("Column reading order: {}", order.join(" ")),
    ];

    let grid = if encrypt {
        steps.push("1. Write the text in rows under the key, padding with X".to_string());
        cipher.grid(input)
    } else {
        steps.push("1. Fill the columns in key order with the ciphertext".to_string());
        cipher.grid(&cipher.decrypt(input)?)
    };
    for row in &grid {
        steps.push(format!("   {row}"));
    }

    if encrypt {
        steps.push("2. Read down each column in key order".to_string());
        let rows: Vec<Vec<char>> = grid.iter().map(|row| row.chars().collect()).collect();
        for &col in cipher.column_order() {
            let column: String = rows.iter().filter_map(|row| row.get(col)).collect();
            steps.push(format!("   {} → {column}", key[col]));
        }
    } else {
        steps.push("2. Read the rows left to right and drop trailing X padding".to_string());
    }
    Ok(steps)
}

fn pollux(input: &str, encrypt: bool) -> Vec<String> {
    let mut steps = vec![
        "Morse symbols become digits: . = 1, - = 2, letter gap = 0".to_string(),
        heading(encrypt, input),
    ];
    if encrypt {
        for c in input.chars() {
            if let Some(code) = morse::encode_char(c) {
                let digits: String = code.chars().map(Pollux::digit).collect();
                steps.push(format!("{} → {code} → {digits}", c.to_ascii_uppercase()));
            }
        }
        steps.push("Join the letters with 0".to_string());
    } else {
        let stream: String = input.chars().filter_map(Pollux::symbol).collect();
        steps.push(format!("Morse stream: {stream}"));
        for code in stream.split(morse::SEPARATOR).filter(|code| !code.is_empty()) {
            if let Some(letter) = morse::decode_code(code) {
                steps.push(format!("{code} → {letter}"));
            }
        }
    }
    steps
}

fn morbit(key: &str, input: &str, encrypt: bool) -> Steps {
    if !encrypt {
        return Ok(vec![
            "1. Replace each digit with the Morse pair it stands for in the key".to_string(),
            "2. Join the pairs into a Morse stream".to_string(),
            "3. Split the stream on x and read each Morse letter".to_string(),
        ]);
    }
    let cipher = Morbit::new(key)?;
    let table: Vec<String> = MORBIT_PAIRS
        .iter()
        .zip(cipher.digits())
        .map(|(pair, digit)| format!("{pair}={digit}"))
        .collect();
    let mut steps = vec![
        format!("Pair table: {}", table.join(" ")),
        format!("Morse stream: {}", morse::joined_stream(input)),
    ];
    steps.extend(Morbit::windows(input).iter().filter_map(|pair| {
        cipher
            .digit_for(pair)
            .map(|digit| format!("{pair} → {digit}"))
    }));
    Ok(steps)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use cryptodrill_ciphers::transform;

    #[test]
    fn test_caesar_trace() {
        let explanation = explain(CipherId::Caesar, "3", "HELLO", "KHOOR", Direction::Encrypt);
        assert_eq!(explanation.title, "Caesar Cipher: encrypt");
        assert!(explanation.steps.contains(&"H (7) + 3 = 10 → K".to_string()));
        assert_eq!(explanation.result, "KHOOR");

        let explanation = explain(CipherId::Caesar, "3", "XYZ", "ABC", Direction::Decrypt);
        assert!(explanation.steps.contains(&"A (0) - 3 = 23 → X".to_string()));
        assert_eq!(explanation.result, "XYZ");
    }

    #[test]
    fn test_hill2_trace() {
        let explanation = explain(CipherId::Hill2x2, "2 1 3 4", "HE", "SL", Direction::Encrypt);
        assert!(explanation
            .steps
            .contains(&"HE = [7, 4] → [2·7 + 1·4, 3·7 + 4·4] mod 26 = [18, 11] → SL".to_string()));
    }

    #[test]
    fn test_affine_trace() {
        let explanation = explain(CipherId::Affine, "5, 8", "A", "I", Direction::Encrypt);
        assert!(explanation
            .steps
            .contains(&"A: (5 × 0 + 8) mod 26 = 8 → I".to_string()));
        let explanation = explain(CipherId::Affine, "5, 8", "A", "I", Direction::Decrypt);
        assert!(explanation.steps.contains(&"a⁻¹ = 21 (since 5 × 21 ≡ 1 mod 26)".to_string()));
        assert!(explanation
            .steps
            .contains(&"I: 21 × (8 - 8) mod 26 = 0 → A".to_string()));
    }

    #[test]
    fn test_rsa_trace() {
        let explanation = explain(CipherId::Rsa, "143, 7", "H", "G", Direction::Encrypt);
        assert!(explanation
            .steps
            .contains(&"H: 7^7 mod 143 = 6, 6 mod 26 = 6 → G".to_string()));
    }

    #[test]
    fn test_invalid_key_does_not_panic() {
        let explanation = explain(CipherId::Hill2x2, "1 2 3", "HI", "", Direction::Encrypt);
        assert_eq!(explanation.steps.len(), 1);
        assert!(explanation.steps[0].contains("invalid"));
    }

    #[test]
    fn test_abbreviated_directions_describe_method() {
        for cipher in [CipherId::Hill3x3, CipherId::FractionatedMorse, CipherId::Morbit] {
            let explanation = explain(
                cipher,
                "6 24 1 13 16 10 20 17 15",
                "HELLO",
                "XYZ",
                Direction::Decrypt,
            );
            assert!(!explanation.steps.is_empty(), "{cipher}");
            assert_eq!(explanation.result, "HELLO");
        }
    }

    #[test]
    fn test_explanations_never_change_the_result() {
        let samples = [
            (CipherId::Atbash, ""),
            (CipherId::Caesar, "5"),
            (CipherId::Aristocrat, "QWERTYUIOPASDFGHJKLZXCVBNM"),
            (CipherId::Xenocrypt, "QWERTYUIOPASDFGHJKLÑZXCVBNM"),
            (CipherId::Hill2x2, "3 3 2 5"),
            (CipherId::Hill3x3, "6 24 1 13 16 10 20 17 15"),
            (CipherId::Affine, "7 2"),
            (CipherId::Baconian, ""),
            (CipherId::FractionatedMorse, "ROUNDTABLE"),
            (CipherId::Porta, "KEY"),
            (CipherId::DancingMen, ""),
            (CipherId::Rsa, "143 7"),
            (CipherId::RunningKey, "LEMON"),
            (CipherId::Railfence, "3"),
            (CipherId::CompleteColumnar, "ZEBRAS"),
            (CipherId::Pollux, ""),
            (CipherId::Morbit, "123456789"),
        ];
        for (cipher, key) in samples {
            let ct = transform(cipher, "ATTACK AT DAWN", key, Direction::Encrypt).unwrap();
            let explanation = explain(cipher, key, "ATTACK AT DAWN", &ct, Direction::Encrypt);
            assert_eq!(explanation.result, ct, "{cipher}");
            assert!(explanation.steps.len() > 1, "{cipher}");
        }
    }

    #[test]
    fn test_display() {
        let explanation = Explanation {
            title: "Title".to_string(),
            steps: vec!["one".to_string(), "two".to_string()],
            result: "R".to_string(),
        };
        assert_eq!(explanation.to_string(), "Title\n  one\n  two\nResult: R");
    }

    #[test]
    fn test_railfence_decrypt_trace() {
        let explanation = explain(
            CipherId::Railfence,
            "3",
            "WEAREDISCOVEREDFLEEATONCE",
            "WECRLTEERDSOEEFEAOCAIVDEN",
            Direction::Decrypt,
        );
        assert!(explanation.steps.contains(&"Rail 1: WECRLTE".to_string()));
    }
}
