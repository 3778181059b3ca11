#[cfg(test)]
/// Parser unit tests.
///
/// Inputs are written as space-separated spellings; each one becomes exactly one token.
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        source.split_whitespace().map(Token::classify).collect()
    }

    fn parse_str(source: &str) -> Result<TypeExpr, ParseError> {
        parse(&tokens(source))
    }

    fn err_message(source: &str) -> String {
        parse_str(source)
            .expect_err("expected a parse error")
            .to_string()
    }

    fn nil() -> TypeExpr {
        TypeExpr::leaf("nil")
    }

    fn any() -> TypeExpr {
        TypeExpr::leaf("any")
    }

    // ========================================================================
    // Atoms and alternatives
    // ========================================================================

    #[test]
    fn test_single_literal_stays_in_choice() {
        assert_eq!(parse_str("any").unwrap(), any());
        assert_eq!(parse_str("int").unwrap(), TypeExpr::leaf("int"));
    }

    #[test]
    fn test_choice_preserves_order() {
        assert_eq!(parse_str("int | any").unwrap(), TypeExpr::choice(["int", "any"]));
    }

    #[test]
    fn test_choice_does_not_deduplicate() {
        assert_eq!(parse_str("any | any").unwrap(), TypeExpr::choice(["any", "any"]));
    }

    #[test]
    fn test_redundant_parentheses_vanish() {
        assert_eq!(parse_str("( ( int | any ) )").unwrap(), TypeExpr::choice(["int", "any"]));
        assert_eq!(parse_str("( int )").unwrap(), TypeExpr::leaf("int"));
    }

    #[test]
    fn test_grouped_choices_flatten() {
        let flat = TypeExpr::choice(["int", "any", "any"]);
        assert_eq!(parse_str("( int | any ) | any").unwrap(), flat);
        assert_eq!(parse_str("int | ( any | any )").unwrap(), flat);
        assert_eq!(parse_str("int | any | any").unwrap(), flat);
    }

    #[test]
    fn test_numeric_literals() {
        assert_eq!(parse_str("0 | 1 | 10 | 999").unwrap(), TypeExpr::choice([0u64, 1, 10, 999]));
        assert_eq!(parse_str("12 [ ]").unwrap(), TypeExpr::list(TypeExpr::leaf(12u64)));
    }

    // ========================================================================
    // List suffixes
    // ========================================================================

    #[test]
    fn test_list_suffix_wraps_single_choice() {
        assert_eq!(parse_str("int [ ]").unwrap(), TypeExpr::list(TypeExpr::leaf("int")));
    }

    #[test]
    fn test_list_of_grouped_choice() {
        assert_eq!(
            parse_str("( int | any ) [ ]").unwrap(),
            TypeExpr::list(TypeExpr::choice(["int", "any"]))
        );
    }

    #[test]
    fn test_list_suffix_binds_tighter_than_bar() {
        let expected = TypeExpr::choice([Alternative::from("int"), TypeExpr::list(any()).into()]);
        assert_eq!(parse_str("int | any [ ]").unwrap(), expected);
    }

    #[test]
    fn test_list_suffixes_nest_per_application() {
        assert_eq!(
            parse_str("any [ ] [ ] [ ]").unwrap(),
            TypeExpr::list(TypeExpr::list(TypeExpr::list(any())))
        );
        assert_eq!(
            parse_str("( ( int | any ) [ ] ) [ ] [ ]").unwrap(),
            TypeExpr::list(TypeExpr::list(TypeExpr::list(TypeExpr::choice(["int", "any"]))))
        );
    }

    // ========================================================================
    // Trees
    // ========================================================================

    #[test]
    fn test_tree_of_any() {
        assert_eq!(parse_str("< any . any >").unwrap(), TypeExpr::tree(any(), any()));
    }

    #[test]
    fn test_tree_with_list_child() {
        assert_eq!(
            parse_str("< any . any [ ] >").unwrap(),
            TypeExpr::tree(any(), TypeExpr::list(any()))
        );
        assert_eq!(
            parse_str("< any . ( int | any ) [ ] >").unwrap(),
            TypeExpr::tree(any(), TypeExpr::list(TypeExpr::choice(["int", "any"])))
        );
    }

    #[test]
    fn test_list_of_trees() {
        assert_eq!(parse_str("< nil . nil > [ ]").unwrap(), TypeExpr::list(TypeExpr::tree(nil(), nil())));
    }

    #[test]
    fn test_tree_in_choice_is_a_member() {
        assert_eq!(
            parse_str("nil | < nil . nil >").unwrap(),
            TypeExpr::choice([Alternative::from("nil"), TypeExpr::tree(nil(), nil()).into()])
        );
    }

    // ========================================================================
    // Fixed-length lists
    // ========================================================================

    #[test]
    fn test_fixed_list_empty() {
        assert_eq!(parse_str("[ ]").unwrap(), nil());
    }

    #[test]
    fn test_fixed_list_single() {
        assert_eq!(parse_str("[ nil ]").unwrap(), TypeExpr::tree(nil(), nil()));
    }

    #[test]
    fn test_fixed_list_pair() {
        assert_eq!(
            parse_str("[ nil , nil ]").unwrap(),
            TypeExpr::tree(nil(), TypeExpr::tree(nil(), nil()))
        );
        assert_eq!(
            parse_str("[ nil , any ]").unwrap(),
            TypeExpr::tree(nil(), TypeExpr::tree(any(), nil()))
        );
    }

    #[test]
    fn test_fixed_list_open_tail() {
        assert_eq!(parse_str("[ nil , ... ]").unwrap(), TypeExpr::tree(nil(), any()));
        assert_eq!(parse_str("[ ... ]").unwrap(), any());
    }

    #[test]
    fn test_fixed_list_of_choices() {
        let choice = TypeExpr::choice(["int", "any"]);
        assert_eq!(
            parse_str("[ int | any , int | any ]").unwrap(),
            TypeExpr::tree(choice.clone(), TypeExpr::tree(choice, nil()))
        );
    }

    #[test]
    fn test_fixed_list_with_list_suffix() {
        assert_eq!(
            parse_str("[ nil , nil ] [ ]").unwrap(),
            TypeExpr::list(TypeExpr::tree(nil(), TypeExpr::tree(nil(), nil())))
        );
    }

    #[test]
    fn test_fixed_list_honours_config() {
        let config = ParseConfig::new().with_list_terminator(0u64).with_open_tail("rest");
        let ty = parse_with_config(&tokens("[ a , ... ]"), &config).unwrap();
        assert_eq!(ty, TypeExpr::tree(TypeExpr::leaf("a"), TypeExpr::leaf("rest")));
        let ty = parse_with_config(&tokens("[ a ]"), &config).unwrap();
        assert_eq!(ty, TypeExpr::tree(TypeExpr::leaf("a"), TypeExpr::leaf(0u64)));
    }

    // ========================================================================
    // Empty input and leftovers
    // ========================================================================

    #[test]
    fn test_empty_input_is_any() {
        assert_eq!(parse(&[]).unwrap(), any());
        assert_eq!(parse(&[]).unwrap(), parse_str("any").unwrap());
    }

    #[test]
    fn test_empty_input_honours_config() {
        let config = ParseConfig::new().with_empty_input("top");
        assert_eq!(parse_with_config(&[], &config).unwrap(), TypeExpr::leaf("top"));
    }

    #[test]
    fn test_trailing_tokens_ignored_by_default() {
        let toks = tokens("< nil . nil > >");
        let mut parser = Parser::new(&toks);
        assert_eq!(parser.parse().unwrap(), TypeExpr::tree(nil(), nil()));
        assert_eq!(parser.remaining(), &[Token::from(PunctuationId::RAngle)]);
    }

    #[test]
    fn test_trailing_tokens_rejected_when_strict() {
        let err = parse_with_config(&tokens("< nil . nil > >"), &ParseConfig::strict()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Unexpected token: expected end of input got '>'");
        let err = parse_with_config(&tokens("[ nil , nil ] ]"), &ParseConfig::strict()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"Unexpected token: expected end of input got ']'");
    }

    // ========================================================================
    // Errors
    // ========================================================================

    #[test]
    fn test_unmatched_openers_hit_end_of_input() {
        for opener in ["[", "(", "<"] {
            let err = parse_str(opener).unwrap_err();
            assert!(
                matches!(err, ParseError::UnexpectedEndOfInput { .. }),
                "'{opener}' should run out of input; got: {err}"
            );
        }
    }

    #[test]
    fn test_separators_cannot_start_an_atom() {
        for token in ["|", ",", ".", "...", ":", "]", ")", ">"] {
            assert_eq!(err_message(token), format!("Unexpected token: '{token}'"));
        }
    }

    #[test]
    fn test_unclosed_tree() {
        insta::assert_snapshot!(err_message("< nil . nil"), @"Unexpected end of input: Expected '>'");
    }

    #[test]
    fn test_unclosed_fixed_list() {
        insta::assert_snapshot!(err_message("[ nil , nil"), @"Unexpected end of input: Expected one of [',', ']']");
    }

    #[test]
    fn test_mismatched_brackets() {
        insta::assert_snapshot!(err_message("< nil . ]"), @"Unexpected token: ']'");
        insta::assert_snapshot!(err_message("< nil . nil ]"), @"Unexpected token: expected '>' got ']'");
        insta::assert_snapshot!(err_message("[ nil , nil >"), @"Unexpected token: expected one of [',', ']'] got '>'");
    }

    #[test]
    fn test_tree_needs_exactly_two_children() {
        insta::assert_snapshot!(err_message("< nil >"), @"Unexpected token: expected '.' got '>'");
        insta::assert_snapshot!(err_message("< nil . >"), @"Unexpected token: '>'");
        insta::assert_snapshot!(err_message("< . nil >"), @"Unexpected token: '.'");
        insta::assert_snapshot!(err_message("< nil . nil . nil >"), @"Unexpected token: expected '>' got '.'");
    }

    #[test]
    fn test_fixed_list_separator_errors() {
        insta::assert_snapshot!(err_message("[ nil . nil ]"), @"Unexpected token: expected one of [',', ']'] got '.'");
        insta::assert_snapshot!(err_message("[ nil . nil ..."), @"Unexpected token: expected one of [',', ']'] got '.'");
        insta::assert_snapshot!(err_message("[ nil , ]"), @"Unexpected token: ']'");
        insta::assert_snapshot!(err_message("[ ... , nil ]"), @"Unexpected token: expected ']' got ','");
    }

    #[test]
    fn test_unclosed_list_suffix() {
        insta::assert_snapshot!(err_message("int [ nil ]"), @"Unexpected token: expected ']' got 'nil'");
        insta::assert_snapshot!(err_message("int ["), @"Unexpected end of input: Expected ']'");
    }

    #[test]
    fn test_dangling_bar() {
        insta::assert_snapshot!(err_message("int |"), @"Unexpected end of input");
        insta::assert_snapshot!(err_message("int | | any"), @"Unexpected token: '|'");
    }

    #[test]
    fn test_unclosed_group() {
        insta::assert_snapshot!(err_message("( int | any"), @"Unexpected end of input: Expected ')'");
        insta::assert_snapshot!(err_message("( int >"), @"Unexpected token: expected ')' got '>'");
    }
}
