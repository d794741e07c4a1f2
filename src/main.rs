use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use beautify::formatting::format;
use beautify::highlighting::highlight;
use beautify::language::Grammar;
use beautify::loading;
use beautify::rendering::{self, Page, Terminal};

mod problem;

fn main() {
    tracing_subscriber::fmt::init();

    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("beautify")
        .version(VERSION)
        .propagate_version(true)
        .about("Lenient reformatting and syntax highlighting for stylesheet, markup, and script text.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("format")
                .about("Re-indent the given source and print it to standard output")
                .arg(
                    Arg::new("grammar")
                        .short('g')
                        .long("grammar")
                        .value_parser(["style", "markup", "script"])
                        .help("Which grammar to scan the input with. Inferred from the filename extension when omitted."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text you want to reformat, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Reformat and highlight the given source as a standalone web page")
                .arg(
                    Arg::new("grammar")
                        .short('g')
                        .long("grammar")
                        .value_parser(["style", "markup", "script"])
                        .help("Which grammar to scan the input with. Inferred from the filename extension when omitted."),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Where to write the page (default: the input filename with a .html extension)."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the text you want to render."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("format", submatches)) => {
            run_format(submatches);
        }
        Some(("render", submatches)) => {
            run_render(submatches);
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: beautify [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_format(submatches: &ArgMatches) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);
    let grammar = resolve_grammar(submatches, filename);

    let content = match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    debug!("formatting {} as {:?}", filename.display(), grammar);

    let colourize = submatches.get_flag("raw-control-chars")
        || std::io::stdout().is_terminal();

    match attempt(&content, grammar, colourize) {
        Some(output) => println!("{}", output),
        None => {
            eprintln!("{}", problem::scan_failure());
            std::process::exit(1);
        }
    }
}

fn run_render(submatches: &ArgMatches) {
    let Some(filename) = submatches.get_one::<String>("filename") else {
        return;
    };
    let filename = Path::new(filename);

    if filename.to_str() == Some("-") {
        eprintln!("{}", problem::no_stdin_render());
        std::process::exit(1);
    }

    let grammar = resolve_grammar(submatches, filename);

    let content = match loading::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    let title = filename
        .display()
        .to_string();
    let page = match attempt_page(&content, grammar, &title) {
        Some(page) => page,
        None => {
            eprintln!("{}", problem::scan_failure());
            std::process::exit(1);
        }
    };

    let target = submatches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| filename.with_extension("html"));

    if let Err(error) = std::fs::write(&target, page) {
        debug!(?error);
        eprintln!("{}", problem::write_failure(&target));
        std::process::exit(1);
    }

    info!("Wrote {}", target.display());
}

fn resolve_grammar(submatches: &ArgMatches, filename: &Path) -> Grammar {
    let grammar = match submatches.get_one::<String>("grammar") {
        Some(name) => Grammar::from_name(name),
        None => Grammar::from_extension(filename),
    };
    match grammar {
        Some(grammar) => grammar,
        None => {
            eprintln!("{}", problem::unknown_grammar(filename));
            std::process::exit(1);
        }
    }
}

/// Run the whole pass under catch_unwind. The scanners are total over their
/// grammars, so a panic here is an internal invariant violation; that is the
/// only condition that surfaces a user-visible diagnostic, and there is no
/// retry because the pass is a pure function of its input.
fn attempt(content: &str, grammar: Grammar, colourize: bool) -> Option<String> {
    guarded(|| {
        let formatted = format(content, grammar);
        if colourize {
            let fragments = highlight(&formatted, grammar);
            rendering::render(&Terminal, fragments)
        } else {
            formatted
        }
    })
}

fn attempt_page(content: &str, grammar: Grammar, title: &str) -> Option<String> {
    guarded(|| {
        let formatted = format(content, grammar);
        let fragments = highlight(&formatted, grammar);
        let markup = rendering::render(&Page, fragments);
        rendering::document(title, &markup)
    })
}

fn guarded<F>(pass: F) -> Option<String>
where
    F: FnOnce() -> String + std::panic::UnwindSafe,
{
    // Suppress the default panic report; the diagnostic is the interface.
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = std::panic::catch_unwind(pass);
    std::panic::set_hook(previous);
    result.ok()
}
