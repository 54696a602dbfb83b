//! Definitions of the context-free grammar type and its productions.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::mem;
use std::rc::Rc;

use log::trace;

use crate::lhs_index::LhsIndex;
use crate::local_prelude::*;
use crate::rule_builder::RuleBuilder;

/// Context-free grammar type.
///
/// Owns an ordered list of productions together with an index from
/// each nonterminal to its productions. The index is kept in sync with
/// the list at all times.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "GrammarParts", into = "GrammarParts")
)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// The array of rules, in insertion order.
    rules: Vec<Production>,
    /// Rule positions grouped by LHS.
    index: LhsIndex,
}

// The index is not serialized. It is rebuilt from the rules.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GrammarParts {
    sym_source: SymbolSource,
    rules: Vec<Production>,
}

#[cfg(feature = "serde")]
impl From<GrammarParts> for Grammar {
    fn from(parts: GrammarParts) -> Self {
        let mut grammar = Grammar::with_sym_source(parts.sym_source);
        for rule in parts.rules {
            grammar.add_production(rule);
        }
        grammar
    }
}

#[cfg(feature = "serde")]
impl From<Grammar> for GrammarParts {
    fn from(grammar: Grammar) -> Self {
        GrammarParts {
            sym_source: grammar.sym_source,
            rules: grammar.rules,
        }
    }
}

/// Standard grammar rule representation.
///
/// Immutable once built. Transformations create new productions.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Production {
    lhs: Symbol,
    rhs: Rc<[Symbol]>,
}

impl Production {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: impl AsRef<[Symbol]>) -> Self {
        Production {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// The rule's left-hand side symbol.
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    /// The rule's right-hand side symbols.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs[..]
    }

    /// Determines whether the RHS is empty.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl Grammar {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context-free grammar with the given symbol source.
    ///
    /// Symbols will be generated with this symbol source.
    pub fn with_sym_source(sym_source: SymbolSource) -> Self {
        Grammar {
            sym_source,
            rules: vec![],
            index: LhsIndex::new(),
        }
    }

    /// Builds a grammar from `(nonterminal, symbol names)` pairs. Names are
    /// interned, so equal names denote the same symbol.
    ///
    /// Equivalent to repeated calls to [`fn add_production`].
    ///
    /// [`fn add_production`]: Self::add_production
    pub fn from_named_rules<I, R, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, R)>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grammar = Grammar::new();
        for (lhs, rhs) in rules {
            let lhs = grammar.intern(lhs.as_ref());
            let rhs: Vec<Symbol> = rhs
                .into_iter()
                .map(|name| grammar.intern(name.as_ref()))
                .collect();
            grammar.add_rule(lhs, rhs);
        }
        grammar
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        self.sym_source.next_sym(name)
    }

    /// Returns the symbol with the given name, creating it if needed.
    pub fn intern(&mut self, name: &str) -> Symbol {
        self.sym_source.intern(name)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Allows access to the symbol source through a reference.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Allows mutable access to the symbol source through a reference.
    pub fn sym_source_mut(&mut self) -> &mut SymbolSource {
        &mut self.sym_source
    }

    /// Adds a rule to this grammar.
    ///
    /// The rule is appended to the list of rules and to the group of
    /// its LHS.
    pub fn add_production(&mut self, rule: Production) {
        self.index.push(rule.lhs, self.rules.len());
        self.rules.push(rule);
    }

    /// Adds a rule with the given LHS and RHS.
    pub fn add_rule(&mut self, lhs: Symbol, rhs: impl AsRef<[Symbol]>) {
        self.add_production(Production::new(lhs, rhs));
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self, lhs)
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &Production> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns an iterator over the rules with the given LHS, in insertion order.
    /// The iterator is empty if there are no such rules.
    pub fn productions_for(&self, lhs: Symbol) -> impl Iterator<Item = &Production> {
        self.index.get(lhs).iter().map(move |&i| &self.rules[i])
    }

    /// Returns the number of rules with the given LHS.
    pub fn num_alternatives(&self, lhs: Symbol) -> usize {
        self.index.get(lhs).len()
    }

    /// Returns distinct LHS symbols in the order they were first seen.
    pub fn all_non_terminals(&self) -> Vec<Symbol> {
        self.index.lhs_symbols().collect()
    }

    /// Determines whether the symbol appears on the LHS of any rule.
    pub fn is_non_terminal(&self, sym: Symbol) -> bool {
        self.index.contains(sym)
    }

    /// Returns the index of rules grouped by LHS.
    pub fn lhs_index(&self) -> &LhsIndex {
        &self.index
    }

    /// Replaces all rules with the given LHS.
    ///
    /// New rules are placed where the first replaced rule was, or at the end
    /// if there was none. They may have any LHS.
    pub fn replace_group(&mut self, lhs: Symbol, replacement: impl IntoIterator<Item = Production>) {
        let first = self.index.get(lhs).first().copied();
        let old_rules = mem::take(&mut self.rules);
        let mut replacement = Some(replacement);
        for (i, rule) in old_rules.into_iter().enumerate() {
            if Some(i) == first {
                self.rules.extend(replacement.take().into_iter().flatten());
            }
            if rule.lhs != lhs {
                self.rules.push(rule);
            }
        }
        self.rules.extend(replacement.take().into_iter().flatten());
        trace!(
            "replaced the group of {}, now {} rules",
            self.sym_source.name_of(lhs),
            self.rules.len()
        );
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index = LhsIndex::from_rules(self.rules.iter());
    }

    /// Formats the grammar to a `String`. The output looks like this:
    ///
    /// ```ignore
    /// S ::= if E then S S1;
    /// S1 ::= ();
    /// ```
    ///
    /// Unnamed symbols are displayed as `g` followed by their ID.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for rule in self.rules() {
            let lhs = self.sym_source.name_of(rule.lhs);
            let rhs = if rule.rhs.is_empty() {
                "()".to_string()
            } else {
                rule.rhs
                    .iter()
                    .map(|&sym| self.sym_source.name_of(sym))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            writeln!(&mut result, "{} ::= {};", lhs, rhs).expect("writing to String failed");
        }
        result
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify_to_bnf())
    }
}
