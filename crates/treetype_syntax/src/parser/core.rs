/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - Parsing stops at the first error; there is no recovery or partial result.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    config: ParseConfig,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default configuration.
    ///
    /// ## Parameters
    /// - `tokens`: the already separated token sequence.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, ParseConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: ParseConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            config,
        }
    }

    /// Parse one complete type expression.
    ///
    /// An empty token sequence parses exactly like the single literal `config.empty_input`.
    /// Leftover tokens are ignored or rejected according to `config.trailing_tokens`.
    ///
    /// ## Errors
    /// The first [`ParseError`] encountered.
    pub fn parse(&mut self) -> Result<TypeExpr, ParseError> {
        if self.cursor.is_at_end() && self.cursor.position() == 0 {
            tracing::trace!(literal = %self.config.empty_input, "empty input, parsing default literal");
            let fallback = [Token::Literal(self.config.empty_input.clone())];
            return Parser::with_config(&fallback, self.config.clone()).parse();
        }

        // `read_alternatives` already applies the root normalization.
        let root = self.read_alternatives()?;
        self.finish()?;
        Ok(root)
    }

    /// Tokens the parse has not consumed. Only non-empty after a successful
    /// [`TrailingTokens::Ignore`] parse or after an error.
    pub fn remaining(&self) -> &'a [Token] {
        self.cursor.remaining()
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        let Some(leftover) = self.cursor.peek() else {
            return Ok(());
        };
        match self.config.trailing_tokens {
            TrailingTokens::Ignore => {
                tracing::debug!(
                    remaining = self.cursor.remaining().len(),
                    next = %leftover,
                    "ignoring tokens after complete type expression"
                );
                Ok(())
            }
            TrailingTokens::Reject => Err(ParseError::unexpected(leftover.clone(), Some(Expected::EndOfInput))),
        }
    }
}
