//! Cursor engine for the brace-structured grammars

use super::Decision;
use crate::language::GrammarRules;

/// Lexical mode of the forward cursor. Depth is not tracked here; the
/// scanner expresses depth changes as indent deltas on each decision and the
/// emitter owns the counter, so one pass carries no ambient state.
enum Mode {
    Normal,
    InString(char),
    InLineComment,
    InBlockComment,
}

struct Scanner<'r> {
    rules: &'r GrammarRules,
    decisions: Vec<Decision>,
    run: String,
    run_leading_space: bool,
    pending_break: bool,
}

impl<'r> Scanner<'r> {
    fn new(rules: &'r GrammarRules) -> Scanner<'r> {
        Scanner {
            rules,
            decisions: Vec::new(),
            run: String::new(),
            run_leading_space: false,
            pending_break: false,
        }
    }

    /// Take an ordinary character into the current run, collapsing
    /// whitespace to single spaces and dropping it entirely at the start of
    /// a run.
    fn absorb(&mut self, c: char) {
        if c.is_whitespace() {
            if self
                .run
                .is_empty()
            {
                self.run_leading_space = true;
            } else if !self
                .run
                .ends_with(' ')
            {
                self.run
                    .push(' ');
            }
        } else {
            self.run
                .push(c);
        }
    }

    /// Emit the pending run, if any, as one decision. A run that continues
    /// the previous line keeps a single leading space so tokens after a
    /// closer do not fuse together.
    fn flush_run(&mut self, indent_after: i32) {
        let text = self
            .run
            .trim_end();
        if !text.is_empty() {
            let break_before = self.pending_break;
            let literal = if !break_before
                && self.run_leading_space
                && !self
                    .decisions
                    .is_empty()
            {
                format!(" {}", text)
            } else {
                text.to_string()
            };
            self.decisions
                .push(Decision {
                    literal,
                    break_before,
                    indent_before: 0,
                    indent_after,
                });
            self.pending_break = false;
        }
        self.run
            .clear();
        self.run_leading_space = false;
    }

    fn open(&mut self, c: char) {
        self.run
            .push(c);
        self.flush_run(1);
        self.pending_break = true;
    }

    fn close(&mut self, c: char) {
        self.flush_run(0);
        self.decisions
            .push(Decision {
                literal: c.to_string(),
                break_before: true,
                indent_before: -1,
                indent_after: 0,
            });
        self.pending_break = self
            .rules
            .break_after_close;
    }

    fn terminate(&mut self, c: char) {
        self.run
            .push(c);
        self.flush_run(0);
        self.pending_break = true;
    }

    /// A comment that gets its own line: break before, break after. Without
    /// the break after, a line comment would swallow the next token on any
    /// subsequent pass.
    fn comment(&mut self, text: String) {
        self.flush_run(0);
        self.decisions
            .push(Decision {
                literal: text,
                break_before: true,
                indent_before: 0,
                indent_after: 0,
            });
        self.pending_break = true;
    }
}

pub(super) fn scan(source: &str, rules: &GrammarRules) -> Vec<Decision> {
    let mut scanner = Scanner::new(rules);
    let mut mode = Mode::Normal;
    let mut buffer = String::new();
    let mut previous = '\0';
    let mut chars = source
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        match mode {
            Mode::InString(quote) => {
                scanner
                    .run
                    .push(c);
                if c == quote && previous != '\\' {
                    mode = Mode::Normal;
                }
            }
            Mode::InLineComment => {
                if c == '\n' {
                    scanner.comment(
                        buffer
                            .trim_end()
                            .to_string(),
                    );
                    buffer.clear();
                    mode = Mode::Normal;
                } else {
                    buffer.push(c);
                }
            }
            Mode::InBlockComment => {
                buffer.push(c);
                if c == '/' && previous == '*' && buffer.len() > 3 {
                    if rules.comment_on_own_line {
                        scanner.comment(buffer.clone());
                    } else {
                        scanner
                            .run
                            .push_str(&buffer);
                    }
                    buffer.clear();
                    mode = Mode::Normal;
                }
            }
            Mode::Normal => {
                if rules
                    .string_delimiters
                    .contains(&c)
                {
                    scanner
                        .run
                        .push(c);
                    mode = Mode::InString(c);
                } else if c == '/' && rules.block_comments && chars.peek() == Some(&'*') {
                    chars.next();
                    buffer.push_str("/*");
                    mode = Mode::InBlockComment;
                    previous = '*';
                    continue;
                } else if c == '/' && rules.line_comments && chars.peek() == Some(&'/') {
                    chars.next();
                    buffer.push_str("//");
                    mode = Mode::InLineComment;
                    previous = '/';
                    continue;
                } else if rules
                    .opens
                    .contains(&c)
                {
                    scanner.open(c);
                } else if rules
                    .closes
                    .contains(&c)
                {
                    scanner.close(c);
                } else if c == rules.terminator {
                    scanner.terminate(c);
                } else {
                    scanner.absorb(c);
                }
            }
        }
        previous = c;
    }

    // Unterminated constructs consume to end of input, by design.
    match mode {
        Mode::InLineComment => scanner.comment(
            buffer
                .trim_end()
                .to_string(),
        ),
        Mode::InBlockComment => {
            if rules.comment_on_own_line {
                scanner.comment(buffer);
            } else {
                scanner
                    .run
                    .push_str(&buffer);
            }
        }
        Mode::Normal | Mode::InString(_) => {}
    }
    scanner.flush_run(0);

    scanner.decisions
}
