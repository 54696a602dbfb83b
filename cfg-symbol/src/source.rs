//! Source

use std::borrow::Cow;
use std::collections::HashMap;
use std::rc::Rc;

use crate::symbol::SymbolRepr;
use crate::Symbol;

/// The name of a symbol.
pub type SymbolName = Rc<str>;

/// A source of numeric symbols. Symbols may have names, and names can be
/// interned.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Option<SymbolName>>", into = "Vec<Option<SymbolName>>")
)]
pub struct SymbolSource {
    names: Vec<Option<SymbolName>>,
    by_name: HashMap<SymbolName, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Returns generated symbols with the given names.
    pub fn with_names<const N: usize>(&mut self, names: [Option<&str>; N]) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for (dest, name) in result.iter_mut().zip(names) {
            *dest = self.next_sym(name.map(Cow::Borrowed));
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded. The first symbol recorded
    /// under a name is the one found by [`fn intern`] and [`fn get`].
    ///
    /// [`fn intern`]: Self::intern
    /// [`fn get`]: Self::get
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.names.len() as SymbolRepr);
        let name: Option<SymbolName> = name.map(|name| name.into());
        if let Some(name) = &name {
            self.by_name.entry(name.clone()).or_insert(ret);
        }
        self.names.push(name);
        ret
    }

    /// Retrieves the symbol with the given name, or generates a new one
    /// if there is no such symbol.
    pub fn intern(&mut self, name: &str) -> Symbol {
        match self.get(name) {
            Some(sym) => sym,
            None => self.next_sym(Some(Cow::Borrowed(name))),
        }
    }

    /// Retrieves the symbol with the given name.
    pub fn get(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of the given symbol. Unnamed symbols are
    /// displayed as `g` followed by their ID.
    pub fn name_of(&self, sym: Symbol) -> Cow<'_, str> {
        match self.names.get(sym.usize()) {
            Some(Some(name)) => Cow::Borrowed(&name[..]),
            _ => Cow::Owned(format!("g{}", sym.usize())),
        }
    }

    /// Determines whether the given name is already used for displaying
    /// some symbol, named or not.
    pub fn is_name_taken(&self, name: &str) -> bool {
        if self.by_name.contains_key(name) {
            return true;
        }
        match name.strip_prefix('g').map(str::parse::<usize>) {
            Some(Ok(id)) => matches!(self.names.get(id), Some(None)),
            _ => false,
        }
    }

    /// Returns the list of names, indexed by symbol ID.
    pub fn names(&self) -> &[Option<SymbolName>] {
        &self.names[..]
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns an iterator over all symbols in use.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + use<> {
        (0..self.num_syms()).map(Symbol::from)
    }
}

impl From<Vec<Option<SymbolName>>> for SymbolSource {
    fn from(names: Vec<Option<SymbolName>>) -> Self {
        let mut by_name = HashMap::new();
        for (id, name) in names.iter().enumerate() {
            if let Some(name) = name {
                by_name.entry(name.clone()).or_insert(Symbol::from(id));
            }
        }
        SymbolSource { names, by_name }
    }
}

impl From<SymbolSource> for Vec<Option<SymbolName>> {
    fn from(source: SymbolSource) -> Self {
        source.names
    }
}
