//! Abstract Syntax Tree for type expressions.
//!
//! The grammar is closed: every parsed type is a [`TypeExpr::Choice`], [`TypeExpr::List`] or
//! [`TypeExpr::Tree`], and choices hold either bare literal leaves or nested nodes.
//!
//! ## Notes
//! - Choice order is significant (matchers try alternatives in order) and duplicates are kept.
//! - A choice never directly contains another choice: [`TypeExpr::push_alternative`] splices.
//! - Nodes own their children outright; there are no back-references.

pub use crate::token::Literal;

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// `T|S|...`: matches any one of the alternatives.
    Choice(Vec<Alternative>),
    /// `T[]`: a list whose every element matches `T`.
    List(Box<TypeExpr>),
    /// `<R.S>`: a node whose children match `R` and `S`.
    Tree { left: Box<TypeExpr>, right: Box<TypeExpr> },
}

/// One member of a [`TypeExpr::Choice`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alternative {
    Leaf(Literal),
    Node(TypeExpr),
}

impl TypeExpr {
    /// A choice of exactly one literal, e.g. the result of parsing `int`.
    pub fn leaf(literal: impl Into<Literal>) -> Self {
        TypeExpr::Choice(vec![Alternative::Leaf(literal.into())])
    }

    /// A choice built from the given alternatives, in order, spliced like the parser does.
    pub fn choice<I, A>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Alternative>,
    {
        let mut choice = TypeExpr::Choice(Vec::new());
        for alternative in alternatives {
            choice.push_alternative(alternative.into());
        }
        choice
    }

    pub fn list(element: TypeExpr) -> Self {
        TypeExpr::List(Box::new(element))
    }

    pub fn tree(left: TypeExpr, right: TypeExpr) -> Self {
        TypeExpr::Tree {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Add an alternative to a choice.
    ///
    /// Leaves and list/tree nodes are appended as-is; a nested choice has its members spliced in
    /// instead of being nested. Does nothing unless `self` is a choice.
    pub fn push_alternative(&mut self, alternative: Alternative) {
        let TypeExpr::Choice(members) = self else {
            return;
        };
        match alternative {
            Alternative::Node(TypeExpr::Choice(nested)) => members.extend(nested),
            other => members.push(other),
        }
    }

    /// The alternatives, if this is a choice.
    pub fn alternatives(&self) -> Option<&[Alternative]> {
        match self {
            TypeExpr::Choice(members) => Some(members),
            _ => None,
        }
    }

    /// Number of `List` layers wrapped directly around this node.
    pub fn list_depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let TypeExpr::List(inner) = node {
            depth += 1;
            node = inner;
        }
        depth
    }
}

impl Alternative {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Alternative::Leaf(_))
    }
}

impl From<Literal> for Alternative {
    fn from(literal: Literal) -> Self {
        Alternative::Leaf(literal)
    }
}

impl From<&str> for Alternative {
    fn from(name: &str) -> Self {
        Alternative::Leaf(Literal::from(name))
    }
}

impl From<u64> for Alternative {
    fn from(value: u64) -> Self {
        Alternative::Leaf(Literal::Int(value))
    }
}

impl From<TypeExpr> for Alternative {
    fn from(node: TypeExpr) -> Self {
        Alternative::Node(node)
    }
}
