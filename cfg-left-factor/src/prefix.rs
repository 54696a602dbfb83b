//! Finds prefixes shared by alternatives of a nonterminal.

use std::collections::BTreeMap;

use cfg_grammar::Grammar;
use cfg_symbol::Symbol;

/// How alternatives are compared when looking for a shared prefix.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PrefixPolicy {
    /// Alternatives are grouped by their first symbol, and each group
    /// of two or more has its own prefix.
    #[default]
    Grouped,
    /// A single prefix must be shared by every alternative.
    Global,
}

/// Alternatives of one nonterminal that share a non-empty prefix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixGroup {
    /// The longest prefix shared by all members.
    pub prefix: Vec<Symbol>,
    /// Positions of the members among the nonterminal's alternatives, ascending.
    pub members: Vec<usize>,
}

/// Returns the length of the longest prefix shared by all given sequences.
///
/// Sequences are walked position by position. The walk stops where some
/// sequence ends or where they disagree. A single sequence is its own
/// prefix; no sequences have an empty prefix.
pub fn common_prefix_len<S: AsRef<[Symbol]>>(seqs: &[S]) -> usize {
    let Some((first, rest)) = seqs.split_first() else {
        return 0;
    };
    let first = first.as_ref();
    first
        .iter()
        .enumerate()
        .take_while(|&(pos, sym)| rest.iter().all(|seq| seq.as_ref().get(pos) == Some(sym)))
        .count()
}

/// Answers prefix queries for a grammar.
#[derive(Clone, Copy)]
pub struct PrefixFinder<'a> {
    grammar: &'a Grammar,
}

impl<'a> PrefixFinder<'a> {
    /// Creates a prefix finder for the given grammar.
    pub fn new(grammar: &'a Grammar) -> Self {
        PrefixFinder { grammar }
    }

    fn alternatives(&self, lhs: Symbol) -> Vec<&'a [Symbol]> {
        self.grammar.productions_for(lhs).map(|rule| rule.rhs()).collect()
    }

    /// Returns the longest prefix shared by every alternative of `lhs`.
    ///
    /// Empty if `lhs` has fewer than two alternatives, or if their first
    /// symbols already diverge.
    pub fn common_prefix(&self, lhs: Symbol) -> Vec<Symbol> {
        let alternatives = self.alternatives(lhs);
        if alternatives.len() < 2 {
            return vec![];
        }
        let len = common_prefix_len(&alternatives);
        alternatives[0][..len].to_vec()
    }

    /// Partitions the alternatives of `lhs` by their first symbol and returns
    /// every group of two or more, with its longest shared prefix.
    ///
    /// Empty alternatives are never grouped. Alternatives missing from the
    /// result share no prefix with any other alternative.
    pub fn prefix_groups(&self, lhs: Symbol) -> Vec<PrefixGroup> {
        let alternatives = self.alternatives(lhs);
        if alternatives.len() < 2 {
            return vec![];
        }
        let mut slot_of_first: BTreeMap<Symbol, usize> = BTreeMap::new();
        let mut partition: Vec<Vec<usize>> = vec![];
        for (i, rhs) in alternatives.iter().enumerate() {
            let Some(&first) = rhs.first() else {
                continue;
            };
            let slot = *slot_of_first.entry(first).or_insert_with(|| {
                partition.push(vec![]);
                partition.len() - 1
            });
            partition[slot].push(i);
        }
        partition
            .into_iter()
            .filter(|members| members.len() >= 2)
            .map(|members| {
                let seqs: Vec<&[Symbol]> = members.iter().map(|&i| alternatives[i]).collect();
                let len = common_prefix_len(&seqs);
                PrefixGroup {
                    prefix: seqs[0][..len].to_vec(),
                    members,
                }
            })
            .collect()
    }

    /// Returns prefix groups according to the given policy.
    ///
    /// With `PrefixPolicy::Global`, there is at most one group, holding
    /// every alternative.
    pub fn groups_with_policy(&self, lhs: Symbol, policy: PrefixPolicy) -> Vec<PrefixGroup> {
        match policy {
            PrefixPolicy::Grouped => self.prefix_groups(lhs),
            PrefixPolicy::Global => {
                let prefix = self.common_prefix(lhs);
                if prefix.is_empty() {
                    vec![]
                } else {
                    vec![PrefixGroup {
                        prefix,
                        members: (0..self.grammar.num_alternatives(lhs)).collect(),
                    }]
                }
            }
        }
    }
}
