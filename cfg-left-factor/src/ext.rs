use cfg_grammar::Grammar;
use cfg_symbol::Symbol;

use crate::{FactorError, LeftFactored, LeftFactoring, PrefixFinder, PrefixGroup};

/// Prefix queries and left-factoring for grammars.
pub trait CfgLeftFactorExt {
    /// Returns the longest prefix shared by every alternative of `lhs`.
    fn common_prefix(&self, lhs: Symbol) -> Vec<Symbol>;
    /// Returns groups of alternatives of `lhs` that share a prefix.
    fn prefix_groups(&self, lhs: Symbol) -> Vec<PrefixGroup>;
    /// Starts left-factoring with options.
    fn left_factoring(&mut self) -> LeftFactoring<'_>;
    /// Left-factors the alternatives of `lhs` once.
    fn left_factor(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError>;
    /// Left-factors `lhs` and the nonterminals it gives rise to, until
    /// nothing is left to factor.
    fn left_factor_to_fixed_point(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError>;
    /// Left-factors every nonterminal.
    fn left_factor_all(&mut self) -> LeftFactored;
}

impl CfgLeftFactorExt for Grammar {
    fn common_prefix(&self, lhs: Symbol) -> Vec<Symbol> {
        PrefixFinder::new(self).common_prefix(lhs)
    }

    fn prefix_groups(&self, lhs: Symbol) -> Vec<PrefixGroup> {
        PrefixFinder::new(self).prefix_groups(lhs)
    }

    fn left_factoring(&mut self) -> LeftFactoring<'_> {
        LeftFactoring::new(self)
    }

    fn left_factor(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError> {
        self.left_factoring().factor(lhs)
    }

    fn left_factor_to_fixed_point(&mut self, lhs: Symbol) -> Result<LeftFactored, FactorError> {
        self.left_factoring().factor_to_fixed_point(lhs)
    }

    fn left_factor_all(&mut self) -> LeftFactored {
        self.left_factoring().factor_all()
    }
}
