#![allow(dead_code)]

use cfg::{Grammar, Production, Symbol};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Rules as `(lhs, rhs)` names, sorted.
pub fn named_rules<'a>(
    grammar: &Grammar,
    rules: impl Iterator<Item = &'a Production>,
) -> Vec<(String, Vec<String>)> {
    let name = |sym: Symbol| grammar.sym_source().name_of(sym).into_owned();
    let mut result = rules
        .map(|rule| (name(rule.lhs()), rule.rhs().iter().copied().map(name).collect()))
        .collect::<Vec<_>>();
    result.sort();
    result
}

pub fn eq_rules(left: &Grammar, right: &Grammar) -> bool {
    let rules_i = named_rules(left, left.rules());
    let rules_j = named_rules(right, right.rules());

    if rules_i != rules_j {
        eprintln!("Left:");
        eprintln!("{}", left.stringify_to_bnf());
        eprintln!("Right:");
        eprintln!("{}", right.stringify_to_bnf());
    }

    rules_i == rules_j
}

pub fn assert_eq_rules(left: &Grammar, right: &Grammar) {
    assert!(eq_rules(left, right), "Rules expected to be equal");
}

/// Parses rules written as `"S -> if E then S"`. An empty right side is epsilon.
pub fn grammar(rules: &[&str]) -> Grammar {
    Grammar::from_named_rules(rules.iter().map(|rule| {
        let (lhs, rhs) = rule.split_once("->").expect("rule without `->`");
        (lhs.trim(), rhs.split_whitespace().collect::<Vec<_>>())
    }))
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .sym_source()
        .get(name)
        .unwrap_or_else(|| panic!("no symbol named {}", name))
}

pub fn names(grammar: &Grammar, syms: &[Symbol]) -> Vec<String> {
    syms.iter()
        .map(|&sym| grammar.sym_source().name_of(sym).into_owned())
        .collect()
}
