/// Parse a token sequence into a [`TypeExpr`] with the default configuration.
///
/// This is the main public entrypoint for parsing. Tokens left over after a complete expression
/// are ignored; use [`parse_with_config`] with [`ParseConfig::strict`] to reject them.
///
/// ## Parameters
/// - `tokens`: the already separated token sequence. May be empty, which parses as `any`.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<TypeExpr, ParseError> {
    Parser::new(tokens).parse()
}

/// Parse a token sequence into a [`TypeExpr`] with an explicit configuration.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), trailing = ?config.trailing_tokens))]
pub fn parse_with_config(tokens: &[Token], config: &ParseConfig) -> Result<TypeExpr, ParseError> {
    Parser::with_config(tokens, config.clone()).parse()
}
