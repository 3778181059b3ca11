//! Parser configuration.
//!
//! Defaults give the standard grammar; the knobs exist for callers that reserve
//! different spellings or want leftover tokens reported.

use treetype_core::lang::literals;

use crate::token::Literal;

/// Type-expression parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Literal parsed in place of an empty token sequence
    pub empty_input: Literal,
    /// Literal that terminates fixed-length list sugar (`[T]` is `<T.nil>`)
    pub list_terminator: Literal,
    /// Literal a trailing `...` in fixed-length list sugar stands for
    pub open_tail: Literal,
    /// What to do with tokens left over after a complete expression
    pub trailing_tokens: TrailingTokens,
}

/// Handling of tokens that follow a complete type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingTokens {
    /// Leave them unconsumed and return the parsed prefix.
    #[default]
    Ignore,
    /// Fail on the first leftover token.
    Reject,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            empty_input: Literal::from(literals::ANY),
            list_terminator: Literal::from(literals::NIL),
            open_tail: Literal::from(literals::ANY),
            trailing_tokens: TrailingTokens::Ignore,
        }
    }
}

impl ParseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a default config that rejects leftover tokens
    pub fn strict() -> Self {
        Self::default().with_trailing_tokens(TrailingTokens::Reject)
    }

    /// Set the literal substituted for empty input
    pub fn with_empty_input(mut self, literal: impl Into<Literal>) -> Self {
        self.empty_input = literal.into();
        self
    }

    /// Set the fixed-length list terminator
    pub fn with_list_terminator(mut self, literal: impl Into<Literal>) -> Self {
        self.list_terminator = literal.into();
        self
    }

    /// Set the literal a trailing `...` stands for
    pub fn with_open_tail(mut self, literal: impl Into<Literal>) -> Self {
        self.open_tail = literal.into();
        self
    }

    /// Set leftover-token handling
    pub fn with_trailing_tokens(mut self, trailing: TrailingTokens) -> Self {
        self.trailing_tokens = trailing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.empty_input, Literal::from("any"));
        assert_eq!(config.list_terminator, Literal::from("nil"));
        assert_eq!(config.open_tail, Literal::from("any"));
        assert_eq!(config.trailing_tokens, TrailingTokens::Ignore);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ParseConfig::new(), ParseConfig::default());
    }

    #[test]
    fn test_strict_only_changes_trailing_tokens() {
        let strict = ParseConfig::strict();
        assert_eq!(strict.trailing_tokens, TrailingTokens::Reject);
        assert_eq!(strict.empty_input, ParseConfig::default().empty_input);
    }

    #[test]
    fn test_builder_chain() {
        let config = ParseConfig::new()
            .with_empty_input("top")
            .with_list_terminator(0u64)
            .with_open_tail("rest");
        assert_eq!(config.empty_input, Literal::from("top"));
        assert_eq!(config.list_terminator, Literal::Int(0));
        assert_eq!(config.open_tail, Literal::from("rest"));
    }

    #[test]
    fn test_builder_override() {
        let config = ParseConfig::new()
            .with_trailing_tokens(TrailingTokens::Reject)
            .with_trailing_tokens(TrailingTokens::Ignore);
        assert_eq!(config.trailing_tokens, TrailingTokens::Ignore); // Last value wins
    }
}
