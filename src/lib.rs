//! A lenient, single-pass reformatting and highlighting engine for
//! stylesheet-like, markup-like, and script-like text.
//!
//! The engine re-indents unstructured or minified text into a readable
//! layout and produces a parallel token-classified rendering for display,
//! without requiring the input to be grammatically valid. Malformed input
//! degrades gracefully: unmatched closers clamp the nesting depth at zero
//! and unterminated strings or comments consume to end of input. Every pass
//! is a pure function of its input string, so concurrent invocations share
//! no state.

pub mod formatting;
pub mod highlighting;
pub mod language;
pub mod loading;
pub mod rendering;
pub mod scanning;
