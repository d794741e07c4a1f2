//! Indentation emitter and presentation types for the beautifier

mod emitter;
mod syntax;

// Re-export all public symbols
pub use emitter::*;
pub use syntax::*;
