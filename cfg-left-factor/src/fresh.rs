//! Names for nonterminals introduced by left-factoring.

use std::borrow::Cow;

use cfg_grammar::Grammar;
use cfg_symbol::{Symbol, SymbolSource};
use log::trace;

/// Returns the name of `base` followed by the smallest positive number that
/// gives a name no symbol uses yet.
///
/// Depends only on the names already in the symbol source. A base shaped
/// like `g` and digits gets an underscore before the number, so the result
/// never looks like the displayed name of an unnamed symbol generated later.
pub(crate) fn fresh_name(sym_source: &SymbolSource, base: Symbol) -> String {
    let base = sym_source.name_of(base);
    let separator = if looks_like_gensym_prefix(&base) { "_" } else { "" };
    let mut n: u64 = 1;
    loop {
        let name = format!("{}{}{}", base, separator, n);
        if !sym_source.is_name_taken(&name) {
            return name;
        }
        n += 1;
    }
}

fn looks_like_gensym_prefix(name: &str) -> bool {
    name.strip_prefix('g')
        .is_some_and(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Generates a new nonterminal, named after `base`.
///
/// # Panics
///
/// Panics if the generated name collides with an existing symbol.
pub(crate) fn fresh_non_terminal(grammar: &mut Grammar, base: Symbol) -> Symbol {
    let name = fresh_name(grammar.sym_source(), base);
    assert!(
        !grammar.sym_source().is_name_taken(&name),
        "fresh nonterminal `{}` collides with an existing symbol",
        name
    );
    let sym = grammar.next_sym(Some(Cow::Owned(name)));
    trace!(
        "introduced {} for {}",
        grammar.sym_source().name_of(sym),
        grammar.sym_source().name_of(base)
    );
    sym
}
