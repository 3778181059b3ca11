#![forbid(unsafe_code)]
//! treetype: structural type expressions over binary trees
//!
//! A type expression such as `int|any[]` or `<nil.nil>[]` describes which binary trees a value may
//! have. This crate re-exports the syntax frontend (token model, type-expression parser,
//! tree-literal parser) and provides the `treetype` command-line tool.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use treetype_core::lang;
pub use treetype_syntax::{ast, config, cursor, diagnostics, parser, token, tree_literal};

pub use treetype_syntax::ast::{Alternative, Literal, TypeExpr};
pub use treetype_syntax::config::{ParseConfig, TrailingTokens};
pub use treetype_syntax::diagnostics::{Expected, ParseError};
pub use treetype_syntax::token::Token;
pub use treetype_syntax::tree_literal::BinaryTree;
