//! Parse errors shared by the type-expression and tree-literal parsers.
//!
//! There are exactly two kinds of failure and both abort the whole parse:
//! - [`ParseError::UnexpectedEndOfInput`]: the tokens ran out where one was required.
//! - [`ParseError::UnexpectedToken`]: a token was present but the grammar position rejects it.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::token::Token;

/// What a grammar position would have accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Exactly one token.
    Token(Token),
    /// One of a known finite set of tokens.
    OneOf(Vec<Token>),
    /// Nothing: the input should have ended here.
    EndOfInput,
}

impl Expected {
    /// Build from a candidate set, collapsing a single candidate to [`Expected::Token`].
    pub fn from_candidates(mut candidates: Vec<Token>) -> Self {
        if candidates.len() == 1 {
            if let Some(token) = candidates.pop() {
                return Expected::Token(token);
            }
        }
        Expected::OneOf(candidates)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(token) => write!(f, "'{token}'"),
            Expected::OneOf(tokens) => {
                f.write_str("one of [")?;
                for (idx, token) in tokens.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{token}'")?;
                }
                f.write_str("]")
            }
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A parse failure. Never recovered from inside the parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error("Unexpected end of input{}", eoi_suffix(.expected))]
    #[diagnostic(
        code(treetype::unexpected_end_of_input),
        help("the expression stops before every bracket is closed")
    )]
    UnexpectedEndOfInput { expected: Option<Expected> },

    #[error("Unexpected token: {}", token_detail(.actual, .expected))]
    #[diagnostic(code(treetype::unexpected_token))]
    UnexpectedToken { actual: Token, expected: Option<Expected> },
}

impl ParseError {
    pub fn end_of_input(expected: Option<Expected>) -> Self {
        ParseError::UnexpectedEndOfInput { expected }
    }

    pub fn unexpected(actual: Token, expected: Option<Expected>) -> Self {
        ParseError::UnexpectedToken { actual, expected }
    }

    /// The offending token, if there was one.
    pub fn actual(&self) -> Option<&Token> {
        match self {
            ParseError::UnexpectedEndOfInput { .. } => None,
            ParseError::UnexpectedToken { actual, .. } => Some(actual),
        }
    }

    pub fn expected(&self) -> Option<&Expected> {
        match self {
            ParseError::UnexpectedEndOfInput { expected } | ParseError::UnexpectedToken { expected, .. } => {
                expected.as_ref()
            }
        }
    }
}

fn eoi_suffix(expected: &Option<Expected>) -> String {
    match expected {
        Some(expected) => format!(": Expected {expected}"),
        None => String::new(),
    }
}

fn token_detail(actual: &Token, expected: &Option<Expected>) -> String {
    match expected {
        Some(expected) => format!("expected {expected} got '{actual}'"),
        None => format!("'{actual}'"),
    }
}
