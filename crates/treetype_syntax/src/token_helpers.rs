//! Small helper APIs for working with `Token`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::token::{Literal, Token};
use treetype_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};

impl Token {
    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            Token::Punctuation(id) => Some(*id),
            Token::Literal(_) => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, Token::Punctuation(p) if *p == id)
    }

    /// Return the literal, if this is a literal token.
    pub fn literal(&self) -> Option<&Literal> {
        match self {
            Token::Literal(literal) => Some(literal),
            Token::Punctuation(_) => None,
        }
    }

    /// Return `true` if this token may never start an atom.
    ///
    /// Separators, markers and closing brackets only make sense after something else has been
    /// read.
    pub fn is_atom_terminator(&self) -> bool {
        match self {
            Token::Punctuation(id) => {
                punctuation::category(*id) != PunctuationCategory::Delimiter || id.is_closing()
            }
            Token::Literal(_) => false,
        }
    }
}
