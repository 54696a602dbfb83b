#![cfg(feature = "cfg-left-factor")]

mod grammars;
mod support;

use std::collections::BTreeSet;

use cfg::left_factor::{FactorError, PrefixPolicy};
use cfg::{CfgLeftFactorExt, Grammar, Symbol};
use test_case::test_case;

/// Expands every alternative of `lhs`, inlining the nonterminals that
/// left-factoring introduced at the end of an alternative.
fn expand(cfg: &Grammar, lhs: Symbol, fresh: &[Symbol]) -> Vec<Vec<Symbol>> {
    let mut result = vec![];
    for rule in cfg.productions_for(lhs) {
        match rule.rhs().split_last() {
            Some((&last, init)) if fresh.contains(&last) => {
                for suffix in expand(cfg, last, fresh) {
                    result.push(init.iter().copied().chain(suffix).collect());
                }
            }
            _ => result.push(rule.rhs().to_vec()),
        }
    }
    result.sort();
    result
}

fn alternatives(cfg: &Grammar, lhs: Symbol) -> Vec<Vec<Symbol>> {
    let mut result: Vec<Vec<Symbol>> = cfg
        .productions_for(lhs)
        .map(|rule| rule.rhs().to_vec())
        .collect();
    result.sort();
    result
}

#[test]
fn test_if_then_else() {
    support::init_logger();
    let mut cfg = grammars::if_then_else();
    let start = support::sym(&cfg, "S");

    let factored = cfg.left_factor(start).unwrap();

    assert_eq!(support::names(&cfg, factored.fresh()), ["S1"]);
    let expected = support::grammar(&[
        "S -> if E then S S1",
        "S -> other",
        "S1 -> else S",
        "S1 -> ",
    ]);
    support::assert_eq_rules(&cfg, &expected);
    assert_eq!(
        cfg.stringify_to_bnf(),
        "S ::= if E then S S1;\nS ::= other;\nS1 ::= ();\nS1 ::= else S;\n"
    );
}

#[test]
fn test_expression() {
    support::init_logger();
    let mut cfg = grammars::expression();
    let e = support::sym(&cfg, "E");

    let factored = cfg.left_factor(e).unwrap();

    assert_eq!(support::names(&cfg, factored.fresh()), ["E1"]);
    let expected = support::grammar(&[
        "E -> T E1",
        "E1 -> + E",
        "E1 -> - E",
        "E1 -> ",
        "T -> F * T",
        "T -> F / T",
        "T -> F",
        "F -> ( E )",
        "F -> id",
    ]);
    support::assert_eq_rules(&cfg, &expected);
    assert_eq!(cfg.all_non_terminals().len(), 4);
}

#[test]
fn test_expression_all() {
    let mut cfg = grammars::expression();

    let factored = cfg.left_factor_all();

    assert_eq!(support::names(&cfg, factored.fresh()), ["E1", "T1"]);
    let expected = support::grammar(&[
        "E -> T E1",
        "E1 -> + E",
        "E1 -> - E",
        "E1 -> ",
        "T -> F T1",
        "T1 -> * T",
        "T1 -> / T",
        "T1 -> ",
        "F -> ( E )",
        "F -> id",
    ]);
    support::assert_eq_rules(&cfg, &expected);
}

#[test]
fn test_duplicates() {
    let mut cfg = support::grammar(&["A -> x y", "A -> x y"]);
    let a = support::sym(&cfg, "A");

    cfg.left_factor(a).unwrap();

    let expected = support::grammar(&["A -> x y A1", "A1 -> ", "A1 -> "]);
    support::assert_eq_rules(&cfg, &expected);
}

#[test]
fn test_duplicates_dedup() {
    let mut cfg = support::grammar(&["A -> x y", "A -> x y", "A -> x y z"]);
    let a = support::sym(&cfg, "A");

    cfg.left_factoring().dedup_suffixes(true).factor(a).unwrap();

    let expected = support::grammar(&["A -> x y A1", "A1 -> ", "A1 -> z"]);
    support::assert_eq_rules(&cfg, &expected);
}

#[test]
fn test_single_pass_leaves_nested_prefix() {
    let mut cfg = grammars::nested_prefixes();
    let a = support::sym(&cfg, "A");

    let factored = cfg.left_factor(a).unwrap();

    let a1 = factored.fresh()[0];
    assert_eq!(support::names(&cfg, &cfg.common_prefix(a1)), [] as [&str; 0]);
    assert_eq!(cfg.prefix_groups(a1).len(), 1);
    let expected = support::grammar(&[
        "A -> a A1",
        "A -> f",
        "A -> ",
        "A1 -> b c",
        "A1 -> b d",
        "A1 -> e",
    ]);
    support::assert_eq_rules(&cfg, &expected);

    // Factoring can be resumed on the fresh nonterminal.
    let again = cfg.left_factor(a1).unwrap();
    assert_eq!(support::names(&cfg, again.fresh()), ["A11"]);
}

#[test]
fn test_fixed_point() {
    support::init_logger();
    let mut cfg = grammars::nested_prefixes();
    let a = support::sym(&cfg, "A");

    let factored = cfg.left_factor_to_fixed_point(a).unwrap();

    assert_eq!(support::names(&cfg, factored.fresh()), ["A1", "A11"]);
    let expected = support::grammar(&[
        "A -> a A1",
        "A -> f",
        "A -> ",
        "A1 -> b A11",
        "A1 -> e",
        "A11 -> c",
        "A11 -> d",
    ]);
    support::assert_eq_rules(&cfg, &expected);
}

#[test_case(&["A -> x y"] ; "single alternative")]
#[test_case(&["A -> x", "A -> y", "A -> "] ; "no shared prefix")]
#[test_case(&["A -> ", "A -> "] ; "two epsilons")]
fn test_nothing_to_factor(rules: &[&str]) {
    let mut cfg = support::grammar(rules);
    let a = support::sym(&cfg, "A");
    let before = cfg.stringify_to_bnf();

    assert_eq!(cfg.left_factor(a), Err(FactorError::NothingToFactor(a)));
    assert_eq!(cfg.left_factor_to_fixed_point(a), Err(FactorError::NothingToFactor(a)));
    assert!(cfg.left_factor_all().fresh().is_empty());
    assert_eq!(cfg.stringify_to_bnf(), before);
}

#[test]
fn test_invalid_non_terminal() {
    let mut cfg = grammars::if_then_else();
    let other = support::sym(&cfg, "other");
    let before = cfg.stringify_to_bnf();

    let error = cfg.left_factor(other).unwrap_err();

    assert_eq!(error, FactorError::InvalidNonTerminal(other));
    assert_eq!(error.symbol(), other);
    assert!(!error.to_string().is_empty());
    assert_eq!(cfg.stringify_to_bnf(), before);
}

#[test]
fn test_global_policy() {
    let mut cfg = support::grammar(&["A -> a b", "A -> a c", "A -> d"]);
    let a = support::sym(&cfg, "A");

    let result = cfg.left_factoring().policy(PrefixPolicy::Global).factor(a);
    assert_eq!(result, Err(FactorError::NothingToFactor(a)));

    let mut cfg = support::grammar(&["A -> a b c", "A -> a b", "A -> a d"]);
    let a = support::sym(&cfg, "A");

    cfg.left_factoring()
        .policy(PrefixPolicy::Global)
        .factor(a)
        .unwrap();

    let expected = support::grammar(&["A -> a A1", "A1 -> b c", "A1 -> b", "A1 -> d"]);
    support::assert_eq_rules(&cfg, &expected);
}

#[test_case(grammars::if_then_else ; "if then else")]
#[test_case(grammars::expression ; "expression")]
#[test_case(grammars::nested_prefixes ; "nested prefixes")]
fn test_alternatives_are_recoverable(make: fn() -> Grammar) {
    let original = make();
    let mut cfg = make();

    let factored = cfg.left_factor_all();

    for lhs in original.all_non_terminals() {
        assert_eq!(
            expand(&cfg, lhs, factored.fresh()),
            alternatives(&original, lhs)
        );
    }
}

#[test_case(grammars::if_then_else ; "if then else")]
#[test_case(grammars::expression ; "expression")]
#[test_case(grammars::nested_prefixes ; "nested prefixes")]
fn test_idempotence(make: fn() -> Grammar) {
    let mut cfg = make();
    cfg.left_factor_all();
    let once = cfg.stringify_to_bnf();

    assert!(cfg.left_factor_all().fresh().is_empty());
    for lhs in cfg.all_non_terminals() {
        assert!(cfg.left_factor(lhs).is_err());
    }
    assert_eq!(cfg.stringify_to_bnf(), once);
}

#[test]
fn test_fresh_names_avoid_existing_symbols() {
    let mut cfg = support::grammar(&[
        "S -> a S1",
        "S -> a b",
        "S2 -> z",
        "S2 -> z S3",
    ]);
    let start = support::sym(&cfg, "S");
    let s2 = support::sym(&cfg, "S2");

    let first = cfg.left_factor(start).unwrap();
    let second = cfg.left_factor(s2).unwrap();

    assert_eq!(support::names(&cfg, first.fresh()), ["S4"]);
    assert_eq!(support::names(&cfg, second.fresh()), ["S21"]);
}

#[test]
fn test_fresh_names_unique_across_passes() {
    let mut cfg = support::grammar(&["A -> x"]);
    let a = support::sym(&cfg, "A");
    let mut fresh = vec![];
    for round in 0..5 {
        let base = cfg.intern(&format!("t{}", round));
        cfg.rule(a).rhs([base]).rhs([base]);
        fresh.extend(cfg.left_factor(a).unwrap().into_fresh());
    }

    assert_eq!(support::names(&cfg, &fresh), ["A1", "A2", "A3", "A4", "A5"]);
    let names: Vec<String> = cfg
        .sym_source()
        .symbols()
        .map(|sym| cfg.sym_source().name_of(sym).into_owned())
        .collect();
    let unique: BTreeSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_fresh_names_of_unnamed_symbols_stay_distinct() {
    let mut cfg = Grammar::new();
    let [a, x, _] = cfg.sym();
    cfg.rule(a).rhs([x]).rhs([x]);

    let fresh = cfg.left_factor(a).unwrap().fresh()[0];
    for _ in 0..10 {
        cfg.next_sym(None);
    }

    assert_eq!(cfg.sym_source().name_of(fresh), "g0_1");
    let names: Vec<String> = cfg
        .sym_source()
        .symbols()
        .map(|sym| cfg.sym_source().name_of(sym).into_owned())
        .collect();
    let unique: BTreeSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}
