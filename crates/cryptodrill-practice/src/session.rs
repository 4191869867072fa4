//! Interactive practice session state and scoring

use std::collections::BTreeMap;

use cryptodrill_ciphers::CipherId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{PracticeError, Result};
use crate::explain::{Explanation, explain};
use crate::question::{PracticeQuestion, QuestionGenerator};

/// Compares a learner's answer with the expected one.
///
/// Case is ignored and all whitespace is removed from both sides before
/// comparing.
pub fn answers_match(expected: &str, given: &str) -> bool {
    let normalize = |text: &str| -> String {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    };
    normalize(expected) == normalize(given)
}

/// Attempts and correct answers for one cipher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherTally {
    /// Answers submitted
    pub attempted: u32,
    /// Answers accepted
    pub correct: u32,
}

/// Session statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Answers submitted
    pub attempted: u32,
    /// Answers accepted
    pub correct: u32,
    /// Questions skipped without an answer
    pub skipped: u32,
    /// Correct answers in a row, reset by a wrong answer
    pub current_streak: u32,
    /// Longest streak seen this session
    pub best_streak: u32,
    /// Per-cipher breakdown
    pub per_cipher: BTreeMap<CipherId, CipherTally>,
}

impl SessionStats {
    /// Fraction of submitted answers that were correct (0.0 before any answer)
    pub fn accuracy(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempted)
        }
    }

    fn record(&mut self, cipher: CipherId, correct: bool) {
        self.attempted += 1;
        let tally = self.per_cipher.entry(cipher).or_default();
        tally.attempted += 1;
        if correct {
            self.correct += 1;
            tally.correct += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }
}

/// Result of submitting an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// Whether the answer was accepted
    pub correct: bool,
    /// Answer the question expected
    pub expected: String,
    /// Answer the learner gave
    pub given: String,
    /// The question that was answered
    pub question: PracticeQuestion,
}

impl AnswerOutcome {
    /// Worked explanation of the answered question
    pub fn explanation(&self) -> Explanation {
        let q = &self.question;
        explain(q.cipher, &q.key, &q.plaintext, &q.ciphertext, q.direction)
    }
}

/// A run of practice questions for one selected cipher
#[derive(Debug)]
pub struct PracticeSession {
    generator: QuestionGenerator,
    cipher: CipherId,
    current: Option<PracticeQuestion>,
    stats: SessionStats,
}

impl PracticeSession {
    /// Start a session on `cipher`
    pub fn new(cipher: CipherId, config: GeneratorConfig) -> Result<Self> {
        let generator = QuestionGenerator::new(config)?;
        info!(
            "Starting practice session for {} (seed {})",
            cipher,
            generator.seed()
        );
        Ok(Self {
            generator,
            cipher,
            current: None,
            stats: SessionStats::default(),
        })
    }

    /// Selected cipher
    pub const fn cipher(&self) -> CipherId {
        self.cipher
    }

    /// Seed of the underlying generator
    pub const fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Switch to another cipher. Any open question is dropped without
    /// being counted.
    pub fn set_cipher(&mut self, cipher: CipherId) {
        debug!("Switching practice cipher from {} to {}", self.cipher, cipher);
        self.cipher = cipher;
        self.current = None;
    }

    /// Draft the next question, replacing any open one
    pub fn next_question(&mut self) -> Result<&PracticeQuestion> {
        let question = self.generator.try_generate(self.cipher)?;
        Ok(&*self.current.insert(question))
    }

    /// The open question, if any
    pub const fn current(&self) -> Option<&PracticeQuestion> {
        self.current.as_ref()
    }

    /// Score `answer` against the open question and close it
    pub fn submit(&mut self, answer: &str) -> Result<AnswerOutcome> {
        let question = self.current.take().ok_or(PracticeError::NoActiveQuestion)?;
        let correct = answers_match(&question.expected_answer, answer);
        self.stats.record(question.cipher, correct);
        debug!(
            "Answer for {} question was {}",
            question.cipher,
            if correct { "correct" } else { "incorrect" }
        );
        Ok(AnswerOutcome {
            correct,
            expected: question.expected_answer.clone(),
            given: answer.to_string(),
            question,
        })
    }

    /// Close the open question without scoring it and return it
    pub fn skip(&mut self) -> Result<PracticeQuestion> {
        let question = self.current.take().ok_or(PracticeError::NoActiveQuestion)?;
        self.stats.skipped += 1;
        Ok(question)
    }

    /// Statistics so far
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
