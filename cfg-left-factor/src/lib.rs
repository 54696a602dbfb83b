//! Left-factoring rewrites alternatives that share a prefix, so that a top-down
//! parser can choose between them by looking at a single symbol.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod ext;
mod fresh;
pub mod left_factor;
pub mod prefix;

pub use crate::error::FactorError;
pub use crate::ext::CfgLeftFactorExt;
pub use crate::left_factor::{LeftFactored, LeftFactoring};
pub use crate::prefix::{common_prefix_len, PrefixFinder, PrefixGroup, PrefixPolicy};
