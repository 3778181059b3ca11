//! Shared syntax frontend for treetype: token model, type-expression parser, AST, diagnostics.
//!
//! A type expression such as `int|any[]`, `<nil.nil>[]` or `[nil,any]` describes the shape of a
//! binary tree. This crate turns an already separated token sequence into a [`ast::TypeExpr`] that
//! a matcher can test concrete trees against. It also carries the companion tree-literal parser
//! used to build concrete [`tree_literal::BinaryTree`] values for fixtures.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not match trees against types.
//! - There is no lexer here. Callers supply tokens; [`token::Token::classify`] maps a single
//!   spelling to a token when the caller only has strings.
//!
//! ## Examples
//! ```rust
//! use treetype_syntax::ast::TypeExpr;
//! use treetype_syntax::parser;
//! use treetype_syntax::token::Token;
//!
//! let tokens: Vec<Token> = ["int", "[", "]"].into_iter().map(Token::classify).collect();
//! let ty = parser::parse(&tokens).unwrap();
//! assert_eq!(ty, TypeExpr::list(TypeExpr::leaf("int")));
//! ```

pub mod ast;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod parser;
pub mod token;
pub mod token_helpers;
pub mod tree_literal;
