//! Renderers for embellishing highlighted fragments

mod page;
mod terminal;

pub use page::*;
pub use terminal::*;

use crate::formatting::{Render, Syntax};

/// Display happens in two passes. First the highlighter classifies formatted
/// text into a Vec of fragments (Syntax tag, String pairs). Then the
/// specified renderer is applied to each pair to produce one
/// embellished/highlighted/marked-up String.
pub fn render(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
