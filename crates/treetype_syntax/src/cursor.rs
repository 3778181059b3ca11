//! Front-consuming cursor over a borrowed token slice.
//!
//! Both parsers read their input strictly left to right with at most one token of lookahead.
//! Instead of shifting tokens off a shared mutable list, the cursor keeps a position into an
//! immutable slice, so the caller's tokens are never modified.

use treetype_core::lang::punctuation::PunctuationId;

use crate::diagnostics::{Expected, ParseError};
use crate::token::Token;

/// Cursor state.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Return `true` once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens not consumed yet.
    pub fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return `true` if the current token is the given punctuation.
    pub fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_some_and(|t| t.is_punctuation(id))
    }

    /// If the current token is the given punctuation, consume it and return `true`.
    pub fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume and return the current token, whatever it is.
    ///
    /// ## Errors
    /// [`ParseError::UnexpectedEndOfInput`] with no expectation if the input is exhausted.
    pub fn take_any(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.peek().ok_or_else(|| ParseError::end_of_input(None))?;
        self.pos += 1;
        Ok(token)
    }

    /// Consume the current token if it is `id`.
    ///
    /// ## Errors
    /// - [`ParseError::UnexpectedEndOfInput`] naming `id` if the input is exhausted.
    /// - [`ParseError::UnexpectedToken`] naming both tokens on a mismatch. The mismatched token is
    ///   still consumed; the parse is over at that point anyway.
    pub fn take_expected(&mut self, id: PunctuationId) -> Result<&'a Token, ParseError> {
        self.take_expected_one_of(&[id])
    }

    /// Consume the current token if it is any of `ids`.
    ///
    /// ## Errors
    /// As [`TokenCursor::take_expected`]; the expectation renders as `one of [...]` when more than
    /// one candidate was given.
    pub fn take_expected_one_of(&mut self, ids: &[PunctuationId]) -> Result<&'a Token, ParseError> {
        let expected = || Expected::from_candidates(ids.iter().copied().map(Token::from).collect());
        let Some(token) = self.peek() else {
            return Err(ParseError::end_of_input(Some(expected())));
        };
        self.pos += 1;
        if ids.iter().any(|id| token.is_punctuation(*id)) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(token.clone(), Some(expected())))
        }
    }
}
