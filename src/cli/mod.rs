//! CLI module for treetype
//!
//! ## Commands
//!
//! - `type [--strict] [TOKENS]...` - Parse a type expression and print its AST
//! - `tree [TOKENS]...` - Parse a binary-tree literal and print it
//!
//! Every argument is exactly one token (`treetype type '<' any . any '[' ']' '>'`). Arguments are
//! classified, never split, so `int[]` is a single name and not a list.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parse structural type expressions and binary-tree literals
#[derive(Parser, Debug)]
#[command(name = "treetype")]
#[command(version = VERSION)]
#[command(about = "Parse structural type expressions and binary-tree literals", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a type expression and print its AST
    Type {
        /// Reject tokens left over after a complete expression
        #[arg(long)]
        strict: bool,
        /// One argument per token; no arguments parses as `any`
        #[arg(value_name = "TOKENS", allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Parse a binary-tree literal and print it
    Tree {
        /// One argument per token; no arguments parses as `nil`
        #[arg(value_name = "TOKENS", allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Type { strict, tokens } => commands::type_command(&tokens, strict),
        Command::Tree { tokens } => commands::tree_command(&tokens),
    }
}

// ============================================================================
// Tests
// ============================================================================
