#![no_main]

use libfuzzer_sys::fuzz_target;
use treetype::{parser, tree_literal, ParseConfig, Token};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // One token per whitespace-separated spelling
        let tokens: Vec<Token> = s.split_whitespace().map(Token::classify).collect();

        let _ = parser::parse(&tokens);
        let _ = parser::parse_with_config(&tokens, &ParseConfig::strict());
        let _ = tree_literal::parse(&tokens);
    }
});
