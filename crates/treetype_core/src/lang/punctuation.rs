//! Punctuation vocabulary.
//!
//! This module defines the canonical set of structural markers used by the type-expression and
//! tree-literal grammars: delimiters, separators, and a few markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use treetype_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("|"), Some(PunctuationId::Bar));
//! assert_eq!(punctuation::as_str(PunctuationId::RBracket), "]");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets of all three kinds.
    Delimiter,
    /// Separators like `|`, `,` and `.`.
    Separator,
    /// Misc markers like `...` and `:`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Bar,
    Comma,
    Dot,

    // Markers
    Ellipsis,
    /// Counter marker. Reserved: no grammar position accepts it yet.
    Colon,

    // Delimiters
    LBracket,
    RBracket,
    LParen,
    RParen,
    LAngle,
    RAngle,
}

impl PunctuationId {
    /// Return `true` for `]`, `)` and `>`.
    pub fn is_closing(self) -> bool {
        matches!(self, PunctuationId::RBracket | PunctuationId::RParen | PunctuationId::RAngle)
    }
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Bar, "|", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Dot, ".", PunctuationCategory::Separator),
    // Markers
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
    info(PunctuationId::Colon, ":", PunctuationCategory::Marker),
    // Delimiters
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LAngle, "<", PunctuationCategory::Delimiter),
    info(PunctuationId::RAngle, ">", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    // The table is declared in `PunctuationId` order.
    &PUNCTUATION[id as usize]
}

/// Resolve a punctuation spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive** and exact: `".."` is not a prefix match for `"..."`.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
