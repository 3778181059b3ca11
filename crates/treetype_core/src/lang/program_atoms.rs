//! Programs-as-data atoms.
//!
//! When a WHILE program is encoded as a tree, each construct is tagged with a small number. Tree
//! literals may spell those tags by name (`@while`, `@cons`, ...) instead of by value.
//!
//! ## Notes
//! - Lookup via [`value_of`] is **case-sensitive** and includes the leading `@`.
//! - `@:=` is an alias of `@asgn`.
//!
//! ## Examples
//! ```rust
//! use treetype_core::lang::program_atoms;
//!
//! assert_eq!(program_atoms::value_of("@while"), Some(5));
//! assert_eq!(program_atoms::value_of("@:="), program_atoms::value_of("@asgn"));
//! assert_eq!(program_atoms::value_of("while"), None);
//! ```

/// Metadata for one programs-as-data atom.
#[derive(Debug, Clone, Copy)]
pub struct ProgramAtomInfo {
    pub spelling: &'static str,
    pub value: u64,
}

/// Registry of all programs-as-data atoms, in value order.
pub const PROGRAM_ATOMS: &[ProgramAtomInfo] = &[
    atom("@asgn", 2),
    atom("@:=", 2),
    atom("@doAsgn", 3),
    atom("@while", 5),
    atom("@doWhile", 7),
    atom("@if", 11),
    atom("@doIf", 13),
    atom("@var", 17),
    atom("@quote", 19),
    atom("@hd", 23),
    atom("@doHd", 29),
    atom("@tl", 31),
    atom("@doTl", 37),
    atom("@cons", 41),
    atom("@doCons", 43),
];

/// Resolve an atom spelling to the number it stands for.
pub fn value_of(s: &str) -> Option<u64> {
    PROGRAM_ATOMS.iter().find(|a| a.spelling == s).map(|a| a.value)
}

const fn atom(spelling: &'static str, value: u64) -> ProgramAtomInfo {
    ProgramAtomInfo { spelling, value }
}
