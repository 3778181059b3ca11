//! Canonical vocabulary shared by the treetype tooling.
//!
//! This crate is intentionally small and dependency-free. It names the punctuation markers of the
//! type-expression and tree-literal grammars and the literal spellings those grammars reserve.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no parser types.
//! - Character-level scanning is not done here (or anywhere in this workspace); callers hand the
//!   parsers already separated tokens.

pub mod lang;
