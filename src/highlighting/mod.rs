//! Token classification over formatted text
//!
//! This is an independent second pass over the emitter's output, applied as
//! an ordered, most-specific-first cascade: comments, then quoted literals,
//! then the grammar's keyword set, then numeric literals, then everything
//! else unmarked. Comments and strings are claimed atomically; no later rule
//! looks inside a span they own.

use crate::formatting::Syntax;
use crate::language::{self, Grammar};

/// Classify formatted text into tagged fragments. Total: never fails for
/// any input in any grammar, and empty input yields no fragments.
/// Concatenating the fragment contents reproduces the input exactly.
pub fn highlight(formatted: &str, grammar: Grammar) -> Vec<(Syntax, String)> {
    let mut fragments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < formatted.len() {
        let rest = &formatted[i..];
        if let Some(width) = comment_at(grammar, rest) {
            flush_plain(grammar, &mut fragments, &mut plain);
            fragments.push((Syntax::Comment, rest[..width].to_string()));
            i += width;
        } else if let Some(width) = string_at(grammar, rest) {
            flush_plain(grammar, &mut fragments, &mut plain);
            fragments.push((Syntax::String, rest[..width].to_string()));
            i += width;
        } else {
            let Some(c) = rest
                .chars()
                .next()
            else {
                break;
            };
            plain.push(c);
            i += c.len_utf8();
        }
    }
    flush_plain(grammar, &mut fragments, &mut plain);

    fragments
}

/// Width of the comment starting here, if one does. Unterminated comments
/// run to end of input.
fn comment_at(grammar: Grammar, rest: &str) -> Option<usize> {
    match grammar {
        Grammar::Style => block_comment_at(rest),
        Grammar::Script => {
            if rest.starts_with("//") {
                Some(
                    rest.find('\n')
                        .unwrap_or(rest.len()),
                )
            } else {
                block_comment_at(rest)
            }
        }
        Grammar::Markup => {
            if rest.starts_with("<!--") {
                Some(
                    rest[4..]
                        .find("-->")
                        .map(|position| 4 + position + 3)
                        .unwrap_or(rest.len()),
                )
            } else {
                None
            }
        }
    }
}

fn block_comment_at(rest: &str) -> Option<usize> {
    if rest.starts_with("/*") {
        Some(
            rest[2..]
                .find("*/")
                .map(|position| 2 + position + 2)
                .unwrap_or(rest.len()),
        )
    } else {
        None
    }
}

/// Width of the quoted literal starting here, if one does. The closing
/// delimiter must match the opening one and not be escaped by a literal
/// backslash immediately before it.
fn string_at(grammar: Grammar, rest: &str) -> Option<usize> {
    let quote = rest
        .chars()
        .next()?;
    let recognized = match grammar {
        Grammar::Style => quote == '"' || quote == '\'',
        Grammar::Markup => quote == '"',
        Grammar::Script => quote == '"' || quote == '\'' || quote == '`',
    };
    if !recognized {
        return None;
    }

    let mut previous = '\0';
    for (position, c) in rest
        .char_indices()
        .skip(1)
    {
        if c == quote && previous != '\\' {
            return Some(position + c.len_utf8());
        }
        previous = c;
    }
    Some(rest.len())
}

/// Classify the unclaimed text between comments and strings: keywords from
/// the grammar's set, then digit runs, then unmarked default.
fn flush_plain(grammar: Grammar, fragments: &mut Vec<(Syntax, String)>, plain: &mut String) {
    if plain.is_empty() {
        return;
    }

    let keywords = language::keywords(grammar);
    let mut neutral = String::new();
    let mut chars = plain
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut number = String::from(c);
            while let Some(&next) = chars.peek() {
                if next.is_ascii_digit() || next == '.' {
                    number.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            push_neutral(fragments, &mut neutral);
            fragments.push((Syntax::Numeric, number));
        } else if c.is_ascii_alphabetic() || c == '_' {
            let mut word = String::from(c);
            while let Some(&next) = chars.peek() {
                if word_continues(grammar, next) {
                    word.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if keywords.contains(&word.as_str()) {
                push_neutral(fragments, &mut neutral);
                fragments.push((Syntax::Keyword, word));
            } else {
                neutral.push_str(&word);
            }
        } else {
            neutral.push(c);
        }
    }
    push_neutral(fragments, &mut neutral);
    plain.clear();
}

fn push_neutral(fragments: &mut Vec<(Syntax, String)>, neutral: &mut String) {
    if !neutral.is_empty() {
        fragments.push((
            Syntax::Neutral,
            neutral.clone(),
        ));
        neutral.clear();
    }
}

/// Hyphenated names are single words in the stylesheet and markup grammars
/// (`font-size`); in the script grammar a hyphen is an operator.
fn word_continues(grammar: Grammar, c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || (matches!(grammar, Grammar::Style | Grammar::Markup) && c == '-')
}
