//! Library for manipulating context-free grammars: building them, finding prefixes shared
//! by alternatives, and left-factoring.

pub use cfg_grammar::*;
#[cfg(feature = "cfg-left-factor")]
pub use cfg_left_factor as left_factor;
#[cfg(feature = "cfg-left-factor")]
pub use cfg_left_factor::CfgLeftFactorExt;
