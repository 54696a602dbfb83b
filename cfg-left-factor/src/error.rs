use std::error::Error;
use std::fmt;

use cfg_symbol::Symbol;

/// Reasons for left-factoring to leave the grammar unchanged.
///
/// Neither is fatal. The grammar is left as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FactorError {
    /// The symbol has no productions in the grammar.
    InvalidNonTerminal(Symbol),
    /// The nonterminal has fewer than two alternatives, or no two
    /// alternatives share a prefix.
    NothingToFactor(Symbol),
}

impl FactorError {
    /// The nonterminal the request was made for.
    pub fn symbol(self) -> Symbol {
        match self {
            FactorError::InvalidNonTerminal(sym) | FactorError::NothingToFactor(sym) => sym,
        }
    }
}

/// The symbol is shown by its numeric ID, since the error carries no symbol
/// source. Callers that have the grammar can log `name_of(err.symbol())`.
impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FactorError::InvalidNonTerminal(sym) => {
                write!(f, "symbol {} has no productions", sym.usize())
            }
            FactorError::NothingToFactor(sym) => {
                write!(f, "nothing to factor for nonterminal {}", sym.usize())
            }
        }
    }
}

impl Error for FactorError {}
