use std::num::NonZeroU32;

/// The primitive an ID is stored in.
pub type SymbolRepr = u32;

/// A common grammar symbol type.
///
/// Symbols are compared by ID only. Whether a symbol is terminal
/// or nonterminal is up to the grammar it is used in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::first()
    }
}

impl Symbol {
    /// Returns the symbol with the lowest ID.
    pub fn first() -> Self {
        Symbol { n: NonZeroU32::MIN }
    }

    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.n.get() as usize - 1
    }
}

impl From<SymbolRepr> for Symbol {
    #[inline]
    fn from(id: SymbolRepr) -> Self {
        let n = id
            .checked_add(1)
            .and_then(NonZeroU32::new)
            .expect("ran out of Symbol space?");
        Symbol { n }
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for SymbolRepr {
    #[inline]
    fn from(sym: Symbol) -> SymbolRepr {
        sym.n.get() - 1
    }
}
