//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::local_prelude::*;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Symbol,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar, lhs: Symbol) -> Self {
        RuleBuilder { lhs, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.lhs = lhs;
        self
    }

    /// Adds a rule alternative to the grammar.
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.grammar.add_rule(self.lhs, syms);
        self
    }

    /// Adds a rule alternative made of symbols with the given names.
    /// Names are interned.
    pub fn rhs_names<I>(self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let syms: Vec<Symbol> = names
            .into_iter()
            .map(|name| self.grammar.intern(name.as_ref()))
            .collect();
        self.rhs(syms)
    }
}
