//! Parser for concrete binary-tree literals.
//!
//! Where a type expression describes a *set* of trees, a tree literal spells out exactly one:
//!
//! ```text
//! tree := 'nil' | 'false' | 'true' | integer | program-atom
//!       | '<' tree '.' tree '>'
//!       | '[' ']' | '[' tree ( ',' tree )* ']'
//! ```
//!
//! `true` is `<nil.nil>`, an integer `n` is a list of `n` nils, and lists are right-nested cons
//! cells ending in `nil`. Programs-as-data atoms such as `@while` stand for their number (see
//! [`treetype_core::lang::program_atoms`]). Unlike the type-expression parser, every token must
//! be consumed.
//!
//! ## Notes
//! - Integers above [`MAX_NUMBER`] are rejected, so one token never allocates more than a
//!   fixed number of nodes.
//! - Trees can be as deep as they are large. Dropping, comparing and formatting walk them with
//!   an explicit stack instead of recursion.
//!
//! ## Examples
//! ```rust
//! use treetype_syntax::token::Token;
//! use treetype_syntax::tree_literal::{self, BinaryTree};
//!
//! let tokens: Vec<Token> = ["<", "nil", ".", "1", ">"].into_iter().map(Token::classify).collect();
//! let tree = tree_literal::parse(&tokens).unwrap();
//! assert_eq!(tree, BinaryTree::node(BinaryTree::Nil, BinaryTree::from_number(1)));
//! ```

use std::{fmt, mem};

use treetype_core::lang::punctuation::{self, PunctuationId};
use treetype_core::lang::{literals, program_atoms};

use crate::cursor::TokenCursor;
use crate::diagnostics::{Expected, ParseError};
use crate::token::{Literal, Token};

/// Largest integer literal a tree literal may contain.
pub const MAX_NUMBER: u64 = 1 << 20;

/// A concrete binary tree.
///
/// `Debug` and `Display` both render the canonical `<l.r>` form.
#[derive(Default)]
pub enum BinaryTree {
    #[default]
    Nil,
    Node { left: Box<BinaryTree>, right: Box<BinaryTree> },
}

impl BinaryTree {
    pub fn node(left: BinaryTree, right: BinaryTree) -> Self {
        BinaryTree::Node {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `<nil.nil>`
    pub fn truth() -> Self {
        BinaryTree::node(BinaryTree::Nil, BinaryTree::Nil)
    }

    /// The list of `n` nils.
    pub fn from_number(n: u64) -> Self {
        (0..n).fold(BinaryTree::Nil, |rest, _| BinaryTree::node(BinaryTree::Nil, rest))
    }

    /// Right-nested cons cells over `items`, terminated by `nil`.
    pub fn from_list(items: Vec<BinaryTree>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(BinaryTree::Nil, |rest, head| BinaryTree::node(head, rest))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, BinaryTree::Nil)
    }

    /// Read the tree back as a number: the length of its right spine if every head is `nil`.
    pub fn as_number(&self) -> Option<u64> {
        let mut count = 0;
        let mut node = self;
        while let BinaryTree::Node { left, right } = node {
            if !left.is_nil() {
                return None;
            }
            count += 1;
            node = right;
        }
        Some(count)
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(self, &mut pending);
        while let Some(mut tree) = pending.pop() {
            // `tree` is dropped with `nil` children, so this never recurses.
            take_children(&mut tree, &mut pending);
        }
    }
}

fn take_children(tree: &mut BinaryTree, pending: &mut Vec<BinaryTree>) {
    if let BinaryTree::Node { left, right } = tree {
        pending.push(mem::take(&mut **left));
        pending.push(mem::take(&mut **right));
    }
}

impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (BinaryTree::Nil, BinaryTree::Nil) => {}
                (BinaryTree::Node { left: l1, right: r1 }, BinaryTree::Node { left: l2, right: r2 }) => {
                    pending.push((&**l1, &**l2));
                    pending.push((&**r1, &**r2));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for BinaryTree {}

impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'t> {
            Tree(&'t BinaryTree),
            Punct(PunctuationId),
        }

        let mut pending = vec![Step::Tree(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Punct(id) => f.write_str(punctuation::as_str(id))?,
                Step::Tree(BinaryTree::Nil) => f.write_str(literals::NIL)?,
                Step::Tree(BinaryTree::Node { left, right }) => {
                    f.write_str(punctuation::as_str(PunctuationId::LAngle))?;
                    pending.push(Step::Punct(PunctuationId::RAngle));
                    pending.push(Step::Tree(&**right));
                    pending.push(Step::Punct(PunctuationId::Dot));
                    pending.push(Step::Tree(&**left));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Parse a token sequence into one [`BinaryTree`].
///
/// An empty token sequence is `nil`.
///
/// ## Errors
/// Returns the first [`ParseError`] encountered, including an `UnexpectedToken` expecting the end
/// of input if tokens remain after a complete tree.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<BinaryTree, ParseError> {
    let mut cursor = TokenCursor::new(tokens);
    if cursor.is_at_end() {
        return Ok(BinaryTree::Nil);
    }

    let tree = read_tree(&mut cursor)?;
    if let Some(leftover) = cursor.peek() {
        return Err(ParseError::unexpected(leftover.clone(), Some(Expected::EndOfInput)));
    }
    Ok(tree)
}

fn read_tree(cursor: &mut TokenCursor<'_>) -> Result<BinaryTree, ParseError> {
    let token = cursor.take_any()?;
    match token {
        Token::Punctuation(PunctuationId::LAngle) => {
            let left = read_tree(cursor)?;
            cursor.take_expected(PunctuationId::Dot)?;
            let right = read_tree(cursor)?;
            cursor.take_expected(PunctuationId::RAngle)?;
            Ok(BinaryTree::node(left, right))
        }
        Token::Punctuation(PunctuationId::LBracket) => read_list(cursor),
        Token::Literal(literal) => {
            literal_tree(literal).ok_or_else(|| ParseError::unexpected(token.clone(), None))
        }
        Token::Punctuation(_) => Err(ParseError::unexpected(token.clone(), None)),
    }
}

/// Entered with `[` consumed.
fn read_list(cursor: &mut TokenCursor<'_>) -> Result<BinaryTree, ParseError> {
    let mut items = Vec::new();
    if cursor.match_punct(PunctuationId::RBracket) {
        return Ok(BinaryTree::Nil);
    }
    loop {
        items.push(read_tree(cursor)?);
        let separator = cursor.take_expected_one_of(&[PunctuationId::Comma, PunctuationId::RBracket])?;
        if separator.is_punctuation(PunctuationId::RBracket) {
            break;
        }
    }
    Ok(BinaryTree::from_list(items))
}

fn literal_tree(literal: &Literal) -> Option<BinaryTree> {
    if literal.is_name(literals::NIL) || literal.is_name(literals::FALSE) {
        return Some(BinaryTree::Nil);
    }
    if literal.is_name(literals::TRUE) {
        return Some(BinaryTree::truth());
    }
    let value = match literal {
        Literal::Int(n) => *n,
        Literal::Name(name) => program_atoms::value_of(name)?,
    };
    (value <= MAX_NUMBER).then(|| BinaryTree::from_number(value))
}
