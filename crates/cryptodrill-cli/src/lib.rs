//! Command-line front end for cryptodrill.
//!
//! The `cryptodrill` binary is a thin wrapper around [`commands::run`];
//! keeping the commands in a library lets the interactive practice loop be
//! exercised with in-memory input and output.

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;

pub use commands::run;
pub use config::{Command, Config, ExplainArgs, TransformArgs};
pub use error::CliError;
