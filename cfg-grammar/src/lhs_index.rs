//! Groups a grammar's rules by their LHS.

use crate::local_prelude::*;

type RuleIndex = usize;

/// An index from each LHS symbol to the positions of its rules.
///
/// Groups are kept in the order in which their LHS was first seen.
/// Within a group, positions are ascending.
#[derive(Clone, Debug, Default)]
pub struct LhsIndex {
    groups: Vec<LhsGroup>,
    slot_of: Vec<Option<usize>>,
}

// Positions of all rules with the same LHS.
#[derive(Clone, Debug)]
struct LhsGroup {
    lhs: Symbol,
    rules: MaybeSmallVec<RuleIndex>,
}

impl LhsIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index for the given list of rules.
    pub fn from_rules<'a>(rules: impl Iterator<Item = &'a Production>) -> Self {
        let mut index = LhsIndex::new();
        for (i, rule) in rules.enumerate() {
            index.push(rule.lhs(), i);
        }
        index
    }

    /// Records a rule at the given position.
    pub fn push(&mut self, lhs: Symbol, rule_idx: RuleIndex) {
        if self.slot_of.len() <= lhs.usize() {
            self.slot_of.resize(lhs.usize() + 1, None);
        }
        let slot = match self.slot_of[lhs.usize()] {
            Some(slot) => slot,
            None => {
                let slot = self.groups.len();
                self.groups.push(LhsGroup {
                    lhs,
                    rules: MaybeSmallVec::new(),
                });
                self.slot_of[lhs.usize()] = Some(slot);
                slot
            }
        };
        self.groups[slot].rules.push(rule_idx);
    }

    /// Returns the positions of rules with the given LHS, or an empty slice.
    pub fn get(&self, lhs: Symbol) -> &[RuleIndex] {
        match self.slot_of.get(lhs.usize()) {
            Some(&Some(slot)) => &self.groups[slot].rules[..],
            _ => &[],
        }
    }

    /// Determines whether any rule has the given LHS.
    pub fn contains(&self, lhs: Symbol) -> bool {
        matches!(self.slot_of.get(lhs.usize()), Some(Some(_)))
    }

    /// Iterates over distinct LHS symbols in first-seen order.
    pub fn lhs_symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.groups.iter().map(|group| group.lhs)
    }
}
