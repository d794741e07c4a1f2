//! Rendering a decision stream into indented text

use tracing::debug;

use crate::language::Grammar;
use crate::scanning::{self, Decision};

/// Re-indent source text. Total for the three grammars: any input, however
/// malformed, produces some output, and identical input always produces
/// byte-identical output.
pub fn format(source: &str, grammar: Grammar) -> String {
    let decisions = scanning::scan(source, grammar);
    debug!("scan produced {} decisions", decisions.len());
    emit(&decisions)
}

/// Write each decision with one horizontal tab per depth level at line
/// start. The depth counter is local to this call and clamped at zero, so
/// unmatched closers can never drive it negative.
pub fn emit(decisions: &[Decision]) -> String {
    let mut depth: i32 = 0;
    let mut output = String::new();

    for decision in decisions {
        depth = (depth + decision.indent_before).max(0);
        if decision.break_before
            && !output.is_empty()
        {
            output.push('\n');
        }
        if output.is_empty() || output.ends_with('\n') {
            for _ in 0..depth {
                output.push('\t');
            }
        }
        output.push_str(&decision.literal);
        depth = (depth + decision.indent_after).max(0);
    }

    output
        .trim()
        .to_string()
}
