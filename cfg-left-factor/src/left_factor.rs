//! Rewrites alternatives that share a prefix.
//!
//! For each group of alternatives `A ::= p s_1 | … | p s_k` with a
//! non-empty shared prefix `p`, the group is replaced with
//! `A ::= p A'` and `A' ::= s_1 | … | s_k`, where `A'` is a fresh
//! nonterminal. Alternatives outside of any group are kept as they are.

use std::collections::{BTreeSet, VecDeque};

use cfg_grammar::{Grammar, Production};
use cfg_symbol::Symbol;
use log::{debug, trace};

use crate::error::FactorError;
use crate::fresh::fresh_non_terminal;
use crate::prefix::{PrefixFinder, PrefixGroup, PrefixPolicy};

/// Left-factoring with options, built with the builder pattern.
pub struct LeftFactoring<'a> {
    grammar: &'a mut Grammar,
    policy: PrefixPolicy,
    dedup_suffixes: bool,
}

/// Outcome of left-factoring.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LeftFactored {
    fresh: Vec<Symbol>,
}

impl LeftFactored {
    /// Nonterminals introduced by left-factoring, in order of creation.
    pub fn fresh(&self) -> &[Symbol] {
        &self.fresh[..]
    }

    /// Converts into the list of introduced nonterminals.
    pub fn into_fresh(self) -> Vec<Symbol> {
        self.fresh
    }
}

impl<'a> LeftFactoring<'a> {
    /// Starts left-factoring with default options: grouped prefixes,
    /// duplicate suffixes kept.
    pub fn new(grammar: &'a mut Grammar) -> Self {
        LeftFactoring {
            grammar,
            policy: PrefixPolicy::default(),
            dedup_suffixes: false,
        }
    }

    /// Assigns the policy for finding prefixes.
    pub fn policy(mut self, policy: PrefixPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Determines whether equal suffixes within a group produce a single rule
    /// for the fresh nonterminal.
    pub fn dedup_suffixes(mut self, dedup_suffixes: bool) -> Self {
        self.dedup_suffixes = dedup_suffixes;
        self
    }

    /// Left-factors the alternatives of `lhs` once.
    ///
    /// Fresh nonterminals may have alternatives that share a prefix in turn.
    /// They can be factored with further calls, or with
    /// [`fn factor_to_fixed_point`].
    ///
    /// The grammar is unchanged if an error is returned.
    ///
    /// [`fn factor_to_fixed_point`]: Self::factor_to_fixed_point
    pub fn factor(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError> {
        if !self.grammar.is_non_terminal(lhs) {
            return Err(FactorError::InvalidNonTerminal(lhs));
        }
        let groups = PrefixFinder::new(self.grammar).groups_with_policy(lhs, self.policy);
        if groups.is_empty() {
            return Err(FactorError::NothingToFactor(lhs));
        }
        let alternatives: Vec<Production> = self.grammar.productions_for(lhs).cloned().collect();

        let mut group_of: Vec<Option<&PrefixGroup>> = vec![None; alternatives.len()];
        for group in &groups {
            for &member in &group.members {
                group_of[member] = Some(group);
            }
        }

        let mut heads = vec![];
        let mut tails = vec![];
        let mut fresh = vec![];
        for (i, alternative) in alternatives.iter().enumerate() {
            match group_of[i] {
                None => heads.push(alternative.clone()),
                Some(group) if group.members[0] == i => {
                    let aux = fresh_non_terminal(self.grammar, lhs);
                    debug!(
                        "Factoring {} out from {} into {}",
                        self.format_symbols(&group.prefix),
                        self.grammar.sym_source().name_of(lhs),
                        self.grammar.sym_source().name_of(aux),
                    );
                    let mut head = group.prefix.clone();
                    head.push(aux);
                    heads.push(Production::new(lhs, head));
                    let mut seen = BTreeSet::new();
                    for &member in &group.members {
                        let suffix = &alternatives[member].rhs()[group.prefix.len()..];
                        if self.dedup_suffixes && !seen.insert(suffix) {
                            continue;
                        }
                        tails.push(Production::new(aux, suffix));
                    }
                    fresh.push(aux);
                }
                Some(_) => {}
            }
        }

        self.grammar
            .replace_group(lhs, heads.into_iter().chain(tails));
        Ok(LeftFactored { fresh })
    }

    /// Left-factors `lhs`, then every nonterminal introduced in the process,
    /// until nothing is left to factor.
    pub fn factor_to_fixed_point(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError> {
        let mut result = self.factor(lhs)?;
        let mut work: VecDeque<Symbol> = result.fresh.iter().copied().collect();
        while let Some(aux) = work.pop_front() {
            trace!(
                "Left-factoring {} again",
                self.grammar.sym_source().name_of(aux)
            );
            match self.factor(aux) {
                Ok(more) => {
                    work.extend(more.fresh.iter().copied());
                    result.fresh.extend(more.fresh);
                }
                Err(FactorError::NothingToFactor(_)) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(result)
    }

    /// Left-factors every nonterminal of the grammar to a fixed point.
    pub fn factor_all(&mut self) -> LeftFactored {
        let mut result = LeftFactored::default();
        for lhs in self.grammar.all_non_terminals() {
            if let Ok(factored) = self.factor_to_fixed_point(lhs) {
                result.fresh.extend(factored.fresh);
            }
        }
        result
    }

    fn format_symbols(&self, syms: &[Symbol]) -> String {
        let sym_source = self.grammar.sym_source();
        syms.iter()
            .map(|&sym| sym_source.name_of(sym))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
