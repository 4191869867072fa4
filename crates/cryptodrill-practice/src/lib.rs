//! Practice drills for classical ciphers
//!
//! Builds on `cryptodrill-ciphers` to draft questions, explain the worked
//! transform behind each one and keep score across a session.
//!
//! # Components
//!
//! - [`QuestionGenerator`]: seeded drafting of self-verified questions
//! - [`explain`]: step-by-step traces of a transform
//! - [`PracticeSession`]: one cipher at a time, with answer scoring and
//!   [`SessionStats`]
//!
//! # Examples
//!
//! ```
//! use cryptodrill_ciphers::CipherId;
//! use cryptodrill_practice::{GeneratorConfig, PracticeSession};
//!
//! let config = GeneratorConfig::new().with_seed(7);
//! let mut session = PracticeSession::new(CipherId::Caesar, config).unwrap();
//! let answer = session.next_question().unwrap().expected_answer.clone();
//! let outcome = session.submit(&answer).unwrap();
//! assert!(outcome.correct);
//! assert_eq!(session.stats().correct, 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod explain;
pub mod keys;
pub mod question;
pub mod session;
pub mod vocabulary;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use error::{PracticeError, Result};
pub use explain::{Explanation, explain};
pub use question::{PracticeQuestion, QuestionGenerator, prompt};
pub use session::{AnswerOutcome, CipherTally, PracticeSession, SessionStats, answers_match};
