//! Library for manipulations on context-free grammars. A grammar is an ordered list of
//! productions, indexed by their left-hand side.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]
#![cfg_attr(test, allow(missing_docs))]

pub mod grammar;
pub mod lhs_index;
pub mod rule_builder;
pub mod symbol_bit_set;

pub use crate::grammar::{Grammar, Production};
pub use crate::symbol_bit_set::SymbolBitSet;
pub use cfg_symbol::{Symbol, SymbolName, SymbolSource};

#[cfg(feature = "smallvec")]
pub(crate) type MaybeSmallVec<T> = smallvec::SmallVec<[T; 4]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type MaybeSmallVec<T> = Vec<T>;

pub(crate) mod local_prelude {
    pub use crate::grammar::{Grammar, Production};
    pub(crate) use crate::MaybeSmallVec;
    pub use cfg_symbol::{Symbol, SymbolSource};
}
