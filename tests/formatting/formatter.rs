#[cfg(test)]
mod verify {
    use beautify::formatting::format;
    use beautify::language::Grammar;

    fn strip_whitespace(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// On any output line the indentation must equal the clamped number of
    /// structural opens minus closes seen so far. Only valid for inputs
    /// without strings or comments containing structural characters.
    fn assert_depth_invariant(formatted: &str) {
        let mut depth: i32 = 0;
        for line in formatted.lines() {
            let tabs = line
                .chars()
                .take_while(|&c| c == '\t')
                .count() as i32;
            let body = line.trim_start_matches('\t');
            let expected = if body.starts_with('}') || body.starts_with(']') {
                (depth - 1).max(0)
            } else {
                depth
            };
            assert_eq!(tabs, expected, "wrong indentation on line {:?}", line);
            for c in body.chars() {
                match c {
                    '{' | '[' => depth += 1,
                    '}' | ']' => depth = (depth - 1).max(0),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn style_rules_and_declarations() {
        assert_eq!(
            format("body{margin:0;padding:0}", Grammar::Style),
            "body{\n\tmargin:0;\n\tpadding:0\n}"
        );
    }

    #[test]
    fn style_comment_copied_as_one_unit() {
        assert_eq!(format("a{/*};*/}", Grammar::Style), "a{\n\t/*};*/\n}");
    }

    #[test]
    fn script_braces_brackets_statements() {
        assert_eq!(
            format("var a=[1,2];if(a){b();}", Grammar::Script),
            "var a=[\n\t1,2\n];\nif(a){\n\tb();\n}"
        );
    }

    #[test]
    fn script_strings_hide_structure() {
        assert_eq!(
            format("var s=\"a;{b}\";c();", Grammar::Script),
            "var s=\"a;{b}\";\nc();"
        );
    }

    #[test]
    fn markup_nesting() {
        assert_eq!(
            format("<div><span>a</span></div>", Grammar::Markup),
            "<div>\n\t<span>\n\t\ta\n\t</span>\n</div>"
        );
    }

    #[test]
    fn markup_void_element_never_opens() {
        assert_eq!(
            format("<div><br><span>x</span></div>", Grammar::Markup),
            "<div>\n\t<br>\n\t<span>\n\t\tx\n\t</span>\n</div>"
        );
    }

    #[test]
    fn markup_unmatched_closer_clamps() {
        assert_eq!(
            format("</div><p>x</p>", Grammar::Markup),
            "</div>\n<p>\n\tx\n</p>"
        );
    }

    #[test]
    fn idempotence_style() {
        let source = "body{margin:0;padding:0}.a{color:red}";
        let once = format(source, Grammar::Style);
        assert_eq!(format(&once, Grammar::Style), once);
    }

    #[test]
    fn idempotence_script() {
        let source = "function f(){var s=\"a;b\";return s;}// done";
        let once = format(source, Grammar::Script);
        assert_eq!(format(&once, Grammar::Script), once);
    }

    #[test]
    fn idempotence_markup() {
        let source = "<ul>  <li>One</li>\n  <li>Two</li> </ul>";
        let once = format(source, Grammar::Markup);
        assert_eq!(format(&once, Grammar::Markup), once);
    }

    #[test]
    fn character_preservation() {
        for (source, grammar) in [
            ("body{margin:0;padding:0}.a{color:red}", Grammar::Style),
            ("var a=[1,2];if(a){b();}", Grammar::Script),
            ("}}}a{b;c;}", Grammar::Style),
        ] {
            let formatted = format(source, grammar);
            assert_eq!(
                strip_whitespace(&formatted),
                strip_whitespace(source),
                "non-whitespace characters must survive formatting of {:?}",
                source
            );
        }
    }

    #[test]
    fn depth_invariant() {
        for (source, grammar) in [
            ("a{b{c;}d;}e{f;}", Grammar::Style),
            ("q{w[1,2];e{r;}}t;", Grammar::Script),
            ("}}}x{y;}", Grammar::Style),
        ] {
            let formatted = format(source, grammar);
            assert_depth_invariant(&formatted);
        }
    }

    #[test]
    fn statements_after_closer_keep_a_space() {
        assert_eq!(
            format("if(a){b();} else {c();}", Grammar::Script),
            "if(a){\n\tb();\n} else {\n\tc();\n}"
        );
    }

    #[test]
    fn unterminated_constructs_consume_to_end() {
        assert_eq!(
            format("a{/* open comment", Grammar::Style),
            "a{\n\t/* open comment"
        );
        assert_eq!(
            format("var s = \"no close", Grammar::Script),
            "var s = \"no close"
        );
        assert_eq!(format("<div><spa", Grammar::Markup), "<div>\n\t<spa");
    }
}
