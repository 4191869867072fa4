//! Command-line configuration.
//!
//! Options can be given as CLI arguments or environment variables:
//! - `--seed` / `CRYPTODRILL_SEED`: fixed seed for question generation
//! - `--max-attempts` / `CRYPTODRILL_MAX_ATTEMPTS`: drafts tried per question
//! - `--log` / `CRYPTODRILL_LOG`: tracing filter (falls back to `RUST_LOG`,
//!   then `warn`)

use clap::{Args, Parser, Subcommand};
use cryptodrill_ciphers::{CipherId, Direction};
use cryptodrill_practice::GeneratorConfig;

use crate::error::CliError;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cryptodrill",
    about = "Classical cipher transforms, worked explanations and practice drills",
    version
)]
pub struct Config {
    /// Fixed seed for question generation (random when unset)
    #[arg(long, global = true, env = "CRYPTODRILL_SEED")]
    pub seed: Option<u64>,

    /// Drafts tried per question before giving up
    #[arg(
        long,
        global = true,
        env = "CRYPTODRILL_MAX_ATTEMPTS",
        default_value_t = 5
    )]
    pub max_attempts: u32,

    /// Log filter directive, e.g. "debug" or "cryptodrill_practice=debug"
    #[arg(long, global = true, env = "CRYPTODRILL_LOG")]
    pub log: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every cipher with its supported directions and key format
    List,
    /// Encrypt text
    Encrypt(TransformArgs),
    /// Decrypt text
    Decrypt(TransformArgs),
    /// Show the worked steps relating a plaintext and ciphertext
    Explain(ExplainArgs),
    /// Generate one practice question
    Question {
        /// Cipher slug (see `list`)
        cipher: CipherId,
        /// Print the question as JSON
        #[arg(long)]
        json: bool,
    },
    /// Answer questions interactively (:skip, :stats, :quit)
    Practice {
        /// Cipher slug (see `list`)
        cipher: CipherId,
    },
}

/// Arguments shared by `encrypt` and `decrypt`.
#[derive(Debug, Clone, Args)]
pub struct TransformArgs {
    /// Cipher slug (see `list`)
    pub cipher: CipherId,

    /// Cipher key; ignored by ciphers that take none
    #[arg(long, short, default_value = "")]
    pub key: String,

    /// Text to transform; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TransformArgs {
    /// Input text as one string
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for `explain`.
#[derive(Debug, Clone, Args)]
pub struct ExplainArgs {
    /// Cipher slug (see `list`)
    pub cipher: CipherId,

    /// Cipher key; ignored by ciphers that take none
    #[arg(long, short, default_value = "")]
    pub key: String,

    /// Plaintext side
    #[arg(long, default_value = "")]
    pub plaintext: String,

    /// Ciphertext side
    #[arg(long, default_value = "")]
    pub ciphertext: String,

    /// Direction to explain (encrypt or decrypt)
    #[arg(long, short, default_value = "encrypt")]
    pub direction: Direction,
}

impl Config {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Question generator configuration derived from the options.
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new().with_max_attempts(self.max_attempts);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), CliError> {
        self.generator_config()
            .validate()
            .map_err(CliError::Config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encrypt() {
        let config =
            Config::try_parse_from(["cryptodrill", "encrypt", "caesar", "--key", "3", "HELLO", "WORLD"])
                .unwrap();
        match config.command {
            Command::Encrypt(args) => {
                assert_eq!(args.cipher, CipherId::Caesar);
                assert_eq!(args.key, "3");
                assert_eq!(args.text(), "HELLO WORLD");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_explain_direction() {
        let config = Config::try_parse_from([
            "cryptodrill",
            "explain",
            "hill-2x2",
            "--key",
            "2 1 3 4",
            "--plaintext",
            "HE",
            "--ciphertext",
            "SL",
            "--direction",
            "decrypt",
        ])
        .unwrap();
        match config.command {
            Command::Explain(args) => {
                assert_eq!(args.cipher, CipherId::Hill2x2);
                assert_eq!(args.direction, Direction::Decrypt);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_cipher_is_rejected() {
        assert!(Config::try_parse_from(["cryptodrill", "question", "enigma"]).is_err());
    }

    #[test]
    fn test_generator_config() {
        let config =
            Config::try_parse_from(["cryptodrill", "--seed", "9", "--max-attempts", "3", "list"])
                .unwrap();
        let generator = config.generator_config();
        assert_eq!(generator.seed, Some(9));
        assert_eq!(generator.max_attempts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_attempts_fails_validation() {
        let config =
            Config::try_parse_from(["cryptodrill", "--max-attempts", "0", "list"]).unwrap();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }
}
