#![allow(dead_code)]

use cfg::Grammar;

use crate::support;

pub fn if_then_else() -> Grammar {
    support::grammar(&[
        "S -> if E then S",
        "S -> if E then S else S",
        "S -> other",
    ])
}

pub fn expression() -> Grammar {
    support::grammar(&[
        "E -> T + E",
        "E -> T - E",
        "E -> T",
        "T -> F * T",
        "T -> F / T",
        "T -> F",
        "F -> ( E )",
        "F -> id",
    ])
}

pub fn nested_prefixes() -> Grammar {
    support::grammar(&[
        "A -> a b c",
        "A -> a b d",
        "A -> a e",
        "A -> f",
        "A -> ",
    ])
}
