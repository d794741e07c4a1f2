//! Single-pass lexical scanners for the three grammars

mod markup;
mod scanner;

use crate::language::{Grammar, SCRIPT_RULES, STYLE_RULES};

/// One formatting decision emitted by a scanner. The literal is a substring
/// of the source (modulo whitespace normalization); the flags tell the
/// emitter whether to start a new line before writing it and how the nesting
/// depth changes around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub literal: String,
    pub break_before: bool,
    pub indent_before: i32,
    pub indent_after: i32,
}

/// Scan source text into an ordered stream of formatting decisions. One
/// forward pass, O(1) lexical state, and total: any input produces some
/// stream. Structural characters inside strings and comments are never
/// interpreted.
pub fn scan(source: &str, grammar: Grammar) -> Vec<Decision> {
    match grammar {
        Grammar::Style => scanner::scan(source, &STYLE_RULES),
        Grammar::Script => scanner::scan(source, &SCRIPT_RULES),
        Grammar::Markup => markup::scan(source),
    }
}
