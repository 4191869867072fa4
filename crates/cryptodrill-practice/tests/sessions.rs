//! Practice sessions driven through the public API

#![allow(clippy::unwrap_used, clippy::expect_used)]

use cryptodrill_ciphers::{CipherId, Direction};
use cryptodrill_practice::{
    GeneratorConfig, PracticeSession, QuestionGenerator, SessionStats, explain,
};
use pretty_assertions::assert_eq;

#[test]
fn every_cipher_can_be_practised() {
    let mut session =
        PracticeSession::new(CipherId::Atbash, GeneratorConfig::new().with_seed(2024)).unwrap();

    for cipher in CipherId::ALL {
        session.set_cipher(cipher);
        for _ in 0..5 {
            let expected = session.next_question().unwrap().expected_answer.clone();
            let outcome = session.submit(&expected).unwrap();
            assert!(outcome.correct, "{cipher}");

            let explanation = outcome.explanation();
            assert_eq!(explanation.result, expected, "{cipher}");
            assert!(!explanation.steps.is_empty(), "{cipher}");
        }
    }

    let stats = session.stats();
    let total = u32::try_from(CipherId::ALL.len() * 5).unwrap();
    assert_eq!(stats.attempted, total);
    assert_eq!(stats.correct, total);
    assert_eq!(stats.best_streak, total);
    assert_eq!(stats.per_cipher.len(), CipherId::ALL.len());
}

#[test]
fn same_seed_gives_same_questions() {
    let config = GeneratorConfig::new().with_seed(77);
    let mut a = QuestionGenerator::new(config.clone()).unwrap();
    let mut b = QuestionGenerator::new(config).unwrap();
    for cipher in CipherId::ALL {
        assert_eq!(a.generate(cipher), b.generate(cipher));
    }
}

#[test]
fn mixed_session_statistics() {
    let mut session =
        PracticeSession::new(CipherId::Caesar, GeneratorConfig::new().with_seed(5)).unwrap();

    let answer = session.next_question().unwrap().expected_answer.clone();
    session.submit(&answer).unwrap();
    session.next_question().unwrap();
    session.submit("nope").unwrap();
    session.next_question().unwrap();
    session.skip().unwrap();

    let stats = session.stats();
    assert_eq!(
        (stats.attempted, stats.correct, stats.skipped),
        (2, 1, 1)
    );
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.best_streak, 1);
    assert!((stats.accuracy() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn stats_serialize_with_cipher_slugs() {
    let mut session =
        PracticeSession::new(CipherId::Hill2x2, GeneratorConfig::new().with_seed(9)).unwrap();
    let answer = session.next_question().unwrap().expected_answer.clone();
    session.submit(&answer).unwrap();

    let json = serde_json::to_string(session.stats()).unwrap();
    assert!(json.contains("\"hill-2x2\""), "{json}");
    let back: SessionStats = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, session.stats());
}

#[test]
fn explanation_scenarios() {
    let explanation = explain(CipherId::Caesar, "3", "XYZ", "ABC", Direction::Encrypt);
    assert_eq!(
        explanation.steps,
        vec![
            "Shift amount: 3".to_string(),
            "Formula: E(x) = (x + shift) mod 26".to_string(),
            "Encrypting \"XYZ\":".to_string(),
            "X (23) + 3 = 0 → A".to_string(),
            "Y (24) + 3 = 1 → B".to_string(),
            "Z (25) + 3 = 2 → C".to_string(),
        ]
    );
    assert_eq!(explanation.result, "ABC");

    let explanation = explain(CipherId::Railfence, "3", "HELLOWORLD", "HOLELWRDLO", Direction::Encrypt);
    assert!(explanation.steps.contains(&"Rail 1: HOL".to_string()));
    assert!(explanation.steps.contains(&"Rail 2: ELWRD".to_string()));
    assert!(explanation.steps.contains(&"Rail 3: LO".to_string()));
}
