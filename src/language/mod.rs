//! Core types shared across the beautifier

use std::path::Path;

mod rules;

pub use rules::*;

/// The three lenient dialects the engine understands. Each one gets a
/// single-pass scanner; none of them requires the input to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Stylesheet-like text: rules, declarations, block comments.
    Style,
    /// Tag-based text: elements, text runs, void elements.
    Markup,
    /// Statement-based text: braces, brackets, three quote styles.
    Script,
}

impl Grammar {
    /// Resolve a grammar from its command line name.
    pub fn from_name(name: &str) -> Option<Grammar> {
        match name {
            "style" => Some(Grammar::Style),
            "markup" => Some(Grammar::Markup),
            "script" => Some(Grammar::Script),
            _ => None,
        }
    }

    /// Infer the grammar from a filename extension.
    pub fn from_extension(filename: &Path) -> Option<Grammar> {
        let extension = filename
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match extension.as_str() {
            "css" | "scss" | "less" => Some(Grammar::Style),
            "html" | "htm" | "xml" | "svg" => Some(Grammar::Markup),
            "js" | "mjs" | "cjs" | "jsx" => Some(Grammar::Script),
            _ => None,
        }
    }
}

/// Problem encountered reading a source file.
#[derive(Debug)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}
