//! Reserved literal spellings.
//!
//! These are ordinary literal tokens as far as the type-expression grammar is concerned; the
//! parsers only give them meaning in a few fixed places (empty input, fixed-length list sugar,
//! tree literals).

/// Matches any tree. Substituted for an empty type expression and for a trailing `...`.
pub const ANY: &str = "any";

/// The empty tree. Terminates fixed-length lists.
pub const NIL: &str = "nil";

/// `<nil.nil>` in tree literals.
pub const TRUE: &str = "true";

/// `nil` in tree literals.
pub const FALSE: &str = "false";
