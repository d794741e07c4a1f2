//! Lexical rule tables for the three grammars

use super::Grammar;

/// The small set of lexical facts that distinguishes one brace-structured
/// grammar from another. The scanner engine is parameterized by one of these
/// values rather than being written once per grammar.
#[derive(Debug)]
pub struct GrammarRules {
    /// Characters that open a nesting level.
    pub opens: &'static [char],
    /// Characters that close a nesting level.
    pub closes: &'static [char],
    /// The character that ends a statement or declaration.
    pub terminator: char,
    /// Whether `//` runs to end of line.
    pub line_comments: bool,
    /// Whether `/* ... */` is recognised.
    pub block_comments: bool,
    /// Quote characters that suspend structural interpretation.
    pub string_delimiters: &'static [char],
    /// Whether a comment is emitted on its own line (Script) or copied
    /// inline into the surrounding run (Style).
    pub comment_on_own_line: bool,
    /// Whether a closing character forces a break after itself as well as
    /// before. Style does; Script keeps constructs like `};` together.
    pub break_after_close: bool,
}

pub static STYLE_RULES: GrammarRules = GrammarRules {
    opens: &['{'],
    closes: &['}'],
    terminator: ';',
    line_comments: false,
    block_comments: true,
    string_delimiters: &[],
    comment_on_own_line: false,
    break_after_close: true,
};

pub static SCRIPT_RULES: GrammarRules = GrammarRules {
    opens: &['{', '['],
    closes: &['}', ']'],
    terminator: ';',
    line_comments: true,
    block_comments: true,
    string_delimiters: &['\'', '"', '`'],
    comment_on_own_line: true,
    break_after_close: false,
};

/// Markup elements that can never contain children and are never explicitly
/// closed. Seeing one of these does not open a nesting level.
pub static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static STYLE_KEYWORDS: &[&str] = &[
    "align-items",
    "background",
    "background-color",
    "border",
    "border-radius",
    "bottom",
    "box-shadow",
    "clear",
    "color",
    "content",
    "cursor",
    "display",
    "flex",
    "flex-direction",
    "float",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "gap",
    "grid",
    "height",
    "justify-content",
    "left",
    "letter-spacing",
    "line-height",
    "margin",
    "max-width",
    "min-height",
    "min-width",
    "opacity",
    "overflow",
    "padding",
    "position",
    "right",
    "text-align",
    "text-decoration",
    "text-transform",
    "top",
    "transform",
    "transition",
    "vertical-align",
    "visibility",
    "white-space",
    "width",
    "z-index",
];

static MARKUP_KEYWORDS: &[&str] = &[
    "a", "article", "aside", "body", "br", "button", "code", "div", "em", "footer", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "head", "header", "hr", "html", "img", "input", "label", "li",
    "link", "main", "meta", "nav", "ol", "option", "p", "pre", "script", "section", "select",
    "span", "strong", "style", "table", "tbody", "td", "textarea", "th", "thead", "title", "tr",
    "ul",
];

static SCRIPT_KEYWORDS: &[&str] = &[
    "async",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "of",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "undefined",
    "var",
    "void",
    "while",
    "yield",
];

/// The reserved words, property names, or element names the highlighter
/// marks for a given grammar.
pub fn keywords(grammar: Grammar) -> &'static [&'static str] {
    match grammar {
        Grammar::Style => STYLE_KEYWORDS,
        Grammar::Markup => MARKUP_KEYWORDS,
        Grammar::Script => SCRIPT_KEYWORDS,
    }
}
