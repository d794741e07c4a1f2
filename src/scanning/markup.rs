//! Tag tokenizer for the markup grammar

use super::Decision;
use crate::language::VOID_ELEMENTS;

/// Scan tag-based text. The pass first collapses whitespace between tags,
/// then tokenizes the result into alternating tag-runs and text-runs, each
/// emitted on its own line at the current depth.
pub(super) fn scan(source: &str) -> Vec<Decision> {
    let collapsed = collapse_between_tags(source);
    let mut decisions = Vec::new();
    let mut text = String::new();
    let mut chars = collapsed
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        if c == '<' {
            flush_text(&mut decisions, &mut text);
            let mut tag = String::from("<");
            while let Some(inner) = chars.next() {
                tag.push(inner);
                if inner == '>' {
                    break;
                }
            }
            decisions.push(classify_tag(tag));
        } else {
            text.push(c);
        }
    }
    flush_text(&mut decisions, &mut text);

    decisions
}

/// Drop whitespace runs that separate a `>` from a following `<`. Whitespace
/// inside text runs is left alone; only the inter-tag kind is structural
/// noise here.
fn collapse_between_tags(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        output.push(c);
        if c == '>' {
            let mut gap = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    gap.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek() != Some(&'<') {
                output.push_str(&gap);
            }
        }
    }

    output
}

fn flush_text(decisions: &mut Vec<Decision>, text: &mut String) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        decisions.push(Decision {
            literal: trimmed.to_string(),
            break_before: true,
            indent_before: 0,
            indent_after: 0,
        });
    }
    text.clear();
}

/// Closing tags decrement depth before they are emitted. Void elements,
/// self-closing tags, and `<!` declarations (comments, doctype) never open a
/// nesting level. Everything else opens.
fn classify_tag(tag: String) -> Decision {
    if tag.starts_with("</") {
        Decision {
            literal: tag,
            break_before: true,
            indent_before: -1,
            indent_after: 0,
        }
    } else if tag.starts_with("<!") || tag.ends_with("/>") || is_void(&tag) {
        Decision {
            literal: tag,
            break_before: true,
            indent_before: 0,
            indent_after: 0,
        }
    } else {
        Decision {
            literal: tag,
            break_before: true,
            indent_before: 0,
            indent_after: 1,
        }
    }
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn is_void(tag: &str) -> bool {
    let name = tag_name(tag);
    VOID_ELEMENTS.contains(&name.as_str())
}
