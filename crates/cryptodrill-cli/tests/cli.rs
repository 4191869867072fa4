//! Command scenarios run through the library entry point

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Cursor;

use clap::Parser;
use cryptodrill_ciphers::CipherId;
use cryptodrill_cli::{Config, run};
use cryptodrill_practice::{GeneratorConfig, PracticeQuestion, QuestionGenerator};
use pretty_assertions::assert_eq;

fn run_args(args: &[&str], stdin: &str) -> String {
    let config = Config::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run(&config, &mut Cursor::new(stdin.as_bytes().to_vec()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn transform_commands() {
    assert_eq!(
        run_args(&["cryptodrill", "encrypt", "affine", "--key", "5,8", "A"], ""),
        "I\n"
    );
    assert_eq!(
        run_args(&["cryptodrill", "decrypt", "hill-2x2", "--key", "2 1 3 4", "SL"], ""),
        "HE\n"
    );
    assert_eq!(
        run_args(&["cryptodrill", "encrypt", "railfence", "-k", "3", "HELLO", "WORLD"], ""),
        "HOREL OLLWD\n"
    );
}

#[test]
fn explain_command() {
    let output = run_args(
        &[
            "cryptodrill",
            "explain",
            "caesar",
            "--key",
            "3",
            "--plaintext",
            "XYZ",
            "--ciphertext",
            "ABC",
        ],
        "",
    );
    assert_eq!(
        output,
        "Caesar Cipher: encrypt\n  Shift amount: 3\n  Formula: E(x) = (x + shift) mod 26\n  \
         Encrypting \"XYZ\":\n  X (23) + 3 = 0 → A\n  Y (24) + 3 = 1 → B\n  Z (25) + 3 = 2 → C\n\
         Result: ABC\n"
    );
}

#[test]
fn explain_with_bad_key_still_prints() {
    let output = run_args(
        &["cryptodrill", "explain", "affine", "--key", "2 3", "--plaintext", "A"],
        "",
    );
    assert!(output.contains("invalid"), "{output}");
}

#[test]
fn question_json_is_reproducible() {
    let output = run_args(&["cryptodrill", "--seed", "31", "question", "porta", "--json"], "");
    let question: PracticeQuestion = serde_json::from_str(&output).unwrap();

    let mut generator = QuestionGenerator::new(GeneratorConfig::new().with_seed(31)).unwrap();
    assert_eq!(question, generator.try_generate(CipherId::Porta).unwrap());
    assert!(question.verify().is_ok());
}

#[test]
fn practice_accepts_the_expected_answer() {
    let mut generator = QuestionGenerator::new(GeneratorConfig::new().with_seed(11)).unwrap();
    let first = generator.try_generate(CipherId::Caesar).unwrap();

    let stdin = format!("{}\n:stats\n:quit\n", first.expected_answer.to_lowercase());
    let output = run_args(&["cryptodrill", "--seed", "11", "practice", "caesar"], &stdin);

    assert!(output.contains(&first.prompt), "{output}");
    assert!(output.contains("Correct!"), "{output}");
    assert!(output.contains("Result: "), "{output}");
    assert!(output.contains("Answered: 1  Correct: 1  Skipped: 0  Accuracy: 100%"));
    assert!(output.contains("caesar: 1/1"));
}
