//! treetype vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `PunctuationId`) and look up spellings/metadata via
//! registry tables instead of comparing raw strings.
//!
//! ## Examples
//! ```rust
//! use treetype_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("..."), Some(PunctuationId::Ellipsis));
//! assert_eq!(punctuation::as_str(PunctuationId::LAngle), "<");
//! ```

pub mod literals;
pub mod program_atoms;
pub mod punctuation;
