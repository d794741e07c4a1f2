// Program wide top-level error handling

use owo_colors::OwoColorize;
use std::path::Path;

use beautify::language::LoadingError;

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    if error
        .details
        .is_empty()
    {
        format!(
            "{}: {}: {}",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold()
        )
    } else {
        format!(
            "{}: {}: {} ({})",
            "error".bright_red(),
            error
                .filename
                .display(),
            error
                .problem
                .bold(),
            error.details
        )
    }
}

/// The single diagnostic for an internal invariant violation inside the
/// formatting pass. Malformed input never reaches this; it is absorbed by
/// the lenient scanners.
pub fn scan_failure() -> String {
    format!(
        "{}: {}",
        "error".bright_red(),
        "could not format; check input".bold()
    )
}

pub fn unknown_grammar(filename: &Path) -> String {
    format!(
        "{}: Unable to infer a grammar for {}; specify one with --grammar.",
        "error".bright_red(),
        filename.display()
    )
}

pub fn write_failure(target: &Path) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        target.display(),
        "Failed writing".bold()
    )
}

pub fn no_stdin_render() -> String {
    format!(
        "{}: Unable to render a page from standard input.",
        "error".bright_red()
    )
}
