//! Token types consumed by the parsers.
//!
//! Tokens use **registry-backed IDs** for structural markers:
//! - `Punctuation(PunctuationId)` for `| , . ... : [ ] ( ) < >`
//! - `Literal(Literal)` for everything else (type names and numeric literals)
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parsers.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use treetype_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// A literal leaf value.
///
/// Literals are opaque to the parsers: `int`, `any` and `12` are all just values a matcher
/// compares against later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Name(String),
    Int(u64),
}

impl Literal {
    /// Return `true` if this is the named literal `name`.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(self, Literal::Name(n) if n == name)
    }
}

impl From<&str> for Literal {
    fn from(name: &str) -> Self {
        Literal::Name(name.to_string())
    }
}

impl From<String> for Literal {
    fn from(name: String) -> Self {
        Literal::Name(name)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::Int(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Name(name) => write!(f, "{name}"),
            Literal::Int(value) => write!(f, "{value}"),
        }
    }
}

/// A single token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Punctuation(PunctuationId),
    Literal(Literal),
}

impl Token {
    /// Construct a named literal token.
    pub fn name(name: impl Into<String>) -> Self {
        Token::Literal(Literal::Name(name.into()))
    }

    /// Construct an integer literal token.
    pub fn int(value: u64) -> Self {
        Token::Literal(Literal::Int(value))
    }

    /// Classify one already separated spelling.
    ///
    /// Punctuation spellings resolve through the registry, all-digit spellings that fit a `u64`
    /// become [`Literal::Int`], and anything else is a [`Literal::Name`]. No splitting happens
    /// here: `"int[]"` is a single name token.
    pub fn classify(spelling: &str) -> Self {
        if let Some(id) = punctuation::from_str(spelling) {
            return Token::Punctuation(id);
        }
        if !spelling.is_empty() && spelling.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = spelling.parse::<u64>() {
                return Token::int(value);
            }
        }
        Token::name(spelling)
    }
}

impl From<PunctuationId> for Token {
    fn from(id: PunctuationId) -> Self {
        Token::Punctuation(id)
    }
}

impl From<Literal> for Token {
    fn from(literal: Literal) -> Self {
        Token::Literal(literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            Token::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_punctuation() {
        assert_eq!(Token::classify("|"), Token::Punctuation(PunctuationId::Bar));
        assert_eq!(Token::classify("..."), Token::Punctuation(PunctuationId::Ellipsis));
        assert_eq!(Token::classify("<"), Token::Punctuation(PunctuationId::LAngle));
    }

    #[test]
    fn test_classify_literals() {
        assert_eq!(Token::classify("int"), Token::name("int"));
        assert_eq!(Token::classify("999"), Token::int(999));
        assert_eq!(Token::classify("0"), Token::int(0));
        // Not a whole number: stays a name
        assert_eq!(Token::classify("-1"), Token::name("-1"));
        assert_eq!(Token::classify("1.5"), Token::name("1.5"));
        // Too large for u64
        assert_eq!(
            Token::classify("99999999999999999999999"),
            Token::name("99999999999999999999999")
        );
    }

    #[test]
    fn test_display_is_spelling() {
        for s in ["|", ",", ".", "...", ":", "[", "]", "(", ")", "<", ">", "nil", "42"] {
            assert_eq!(Token::classify(s).to_string(), s);
        }
    }
}
