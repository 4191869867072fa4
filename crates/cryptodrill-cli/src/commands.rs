//! Command execution.
//!
//! Commands read from any [`BufRead`] and write to any [`Write`] so the
//! interactive loop can be driven from tests as well as from a terminal.

use std::io::{BufRead, Write};

use cryptodrill_ciphers::{CipherId, Direction, catalog, transform};
use cryptodrill_practice::{
    AnswerOutcome, PracticeQuestion, PracticeSession, QuestionGenerator, SessionStats, explain,
};
use tracing::{debug, warn};

use crate::config::{Command, Config, ExplainArgs, TransformArgs};
use crate::error::CliError;

/// Runs the configured command.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    debug!("Running command {:?}", config.command);
    match &config.command {
        Command::List => list(out),
        Command::Encrypt(args) => transform_text(args, Direction::Encrypt, out),
        Command::Decrypt(args) => transform_text(args, Direction::Decrypt, out),
        Command::Explain(args) => explain_text(args, out),
        Command::Question { cipher, json } => question(config, *cipher, *json, out),
        Command::Practice { cipher } => practice(config, *cipher, input, out),
    }
}

fn list<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "{:<24} {:<32} {:<17} KEY", "CIPHER", "NAME", "DIRECTIONS")?;
    for spec in catalog() {
        let directions: Vec<String> = spec
            .directions()
            .iter()
            .map(ToString::to_string)
            .collect();
        let key = if spec.requires_key {
            spec.key_hint
        } else {
            "none"
        };
        writeln!(
            out,
            "{:<24} {:<32} {:<17} {}",
            spec.slug,
            spec.name,
            directions.join(", "),
            key
        )?;
    }
    Ok(())
}

fn transform_text<W: Write>(
    args: &TransformArgs,
    direction: Direction,
    out: &mut W,
) -> Result<(), CliError> {
    let output = transform(args.cipher, &args.text(), &args.key, direction)?;
    writeln!(out, "{output}")?;
    Ok(())
}

fn explain_text<W: Write>(args: &ExplainArgs, out: &mut W) -> Result<(), CliError> {
    let explanation = explain(
        args.cipher,
        &args.key,
        &args.plaintext,
        &args.ciphertext,
        args.direction,
    );
    writeln!(out, "{explanation}")?;
    Ok(())
}

fn question<W: Write>(
    config: &Config,
    cipher: CipherId,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let mut generator = QuestionGenerator::new(config.generator_config())?;
    let question = generator.try_generate(cipher)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &question)?;
        writeln!(out)?;
    } else {
        print_question(out, &question)?;
        writeln!(out, "Answer: {}", question.expected_answer)?;
    }
    Ok(())
}

fn print_question<W: Write>(out: &mut W, question: &PracticeQuestion) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "{}", question.prompt)?;
    if !question.key.is_empty() {
        writeln!(out, "Key: {}", question.key)?;
    }
    writeln!(out, "Text: {}", question.input())?;
    Ok(())
}

fn print_outcome<W: Write>(out: &mut W, outcome: &AnswerOutcome) -> Result<(), CliError> {
    if outcome.correct {
        writeln!(out, "Correct!")?;
    } else {
        writeln!(out, "Incorrect. The answer was: {}", outcome.expected)?;
    }
    writeln!(out, "{}", outcome.explanation())?;
    Ok(())
}

fn print_stats<W: Write>(out: &mut W, stats: &SessionStats) -> Result<(), CliError> {
    writeln!(
        out,
        "Answered: {}  Correct: {}  Skipped: {}  Accuracy: {:.0}%",
        stats.attempted,
        stats.correct,
        stats.skipped,
        stats.accuracy() * 100.0
    )?;
    writeln!(
        out,
        "Streak: {} (best {})",
        stats.current_streak, stats.best_streak
    )?;
    for (cipher, tally) in &stats.per_cipher {
        writeln!(out, "  {cipher}: {}/{}", tally.correct, tally.attempted)?;
    }
    Ok(())
}

fn practice<R: BufRead, W: Write>(
    config: &Config,
    cipher: CipherId,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut session = PracticeSession::new(cipher, config.generator_config())?;
    writeln!(
        out,
        "Practising {} (seed {}). Commands: :skip, :stats, :quit",
        cipher.spec().name,
        session.seed()
    )?;

    let mut line = String::new();
    'questions: loop {
        match session.next_question() {
            Ok(question) => print_question(out, question)?,
            Err(e) => {
                warn!("Stopping practice: {}", e);
                writeln!(out, "Could not generate a question: {e}")?;
                break;
            }
        }

        loop {
            write!(out, "> ")?;
            out.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break 'questions;
            }
            match line.trim() {
                "" => {}
                ":quit" | ":q" => break 'questions,
                ":stats" => print_stats(out, session.stats())?,
                ":skip" => {
                    let skipped = session.skip()?;
                    writeln!(out, "Skipped. The answer was: {}", skipped.expected_answer)?;
                    continue 'questions;
                }
                answer => {
                    let outcome = session.submit(answer)?;
                    print_outcome(out, &outcome)?;
                    continue 'questions;
                }
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Session summary")?;
    print_stats(out, session.stats())
}
