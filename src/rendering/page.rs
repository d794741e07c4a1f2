//! HTML page renderer for beautified output

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::formatting::{Render, Syntax};

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
pre \{ font-family: monospace; tab-size: 4; }
.comment \{ color: #999999; }
.string \{ color: #4e9a06; font-weight: bold; }
.keyword \{ color: #3465a4; font-weight: bold; }
.numeric \{ color: #ad7fa8; font-weight: bold; }
</style>
</head>
<body>
<pre>{markup | unescaped}</pre>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    markup: String,
}

/// Wrap each marked fragment in a span carrying one class per category;
/// unmarked content passes through with only entity escaping.
pub struct Page;

impl Render for Page {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => escape(content),
            Syntax::Comment => wrap("comment", content),
            Syntax::String => wrap("string", content),
            Syntax::Keyword => wrap("keyword", content),
            Syntax::Numeric => wrap("numeric", content),
        }
    }
}

fn wrap(class: &str, content: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, class, escape(content))
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Assemble a complete standalone page around already-rendered markup.
pub fn document(title: &str, markup: &str) -> String {
    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)
        .expect("Register page template");

    let context = Context {
        title: title.to_string(),
        markup: markup.to_string(),
    };

    tt.render("page", &context)
        .expect("Render page template")
}
