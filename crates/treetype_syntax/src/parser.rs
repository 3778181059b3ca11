//! Parser for treetype type expressions
//!
//! Converts a token sequence into a [`TypeExpr`]. The grammar, loosest binding first:
//!
//! ```text
//! alternatives := atom ( '|' atom )*
//! atom         := ( literal | '(' alternatives ')' | '<' alternatives '.' alternatives '>'
//!                 | fixed-list ) ( '[' ']' )*
//! fixed-list   := '[' ']' | '[' ( alternatives ',' )* ( alternatives | '...' ) ']'
//! ```
//!
//! The postfix `[]` binds tighter than `|`: `int|any[]` is a choice of `int` and a list of `any`,
//! while `(int|any)[]` is a list of the choice.
//!
//! ## Examples
//!
//! ```rust
//! use treetype_syntax::ast::TypeExpr;
//! use treetype_syntax::parser;
//! use treetype_syntax::token::Token;
//!
//! let tokens: Vec<Token> = ["<", "any", ".", "any", "[", "]", ">"].into_iter().map(Token::classify).collect();
//! let ty = parser::parse(&tokens).unwrap();
//! assert_eq!(ty, TypeExpr::tree(TypeExpr::leaf("any"), TypeExpr::list(TypeExpr::leaf("any"))));
//! ```

use crate::ast::{Alternative, TypeExpr};
use crate::config::{ParseConfig, TrailingTokens};
use crate::cursor::TokenCursor;
use crate::diagnostics::{Expected, ParseError};
use crate::token::Token;
use treetype_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/atoms.rs");
include!("parser/sections.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
