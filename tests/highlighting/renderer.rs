#[cfg(test)]
mod verify {
    use beautify::formatting::{format, Render, Syntax};
    use beautify::highlighting::highlight;
    use beautify::language::Grammar;
    use beautify::rendering::{document, render, Page, Terminal};

    #[test]
    fn terminal_leaves_neutral_content_alone() {
        let result = Render::style(&Terminal, Syntax::Neutral, "plain");
        assert_eq!(result, "plain");
    }

    #[test]
    fn page_classes_match_categories() {
        for (syntax, class) in [
            (Syntax::Comment, "comment"),
            (Syntax::String, "string"),
            (Syntax::Keyword, "keyword"),
            (Syntax::Numeric, "numeric"),
        ] {
            let result = Render::style(&Page, syntax, "x");
            assert_eq!(result, format!("<span class=\"{}\">x</span>", class));
        }
    }

    #[test]
    fn page_escapes_markup_content() {
        let formatted = format("<div><p>a</p></div>", Grammar::Markup);
        let fragments = highlight(&formatted, Grammar::Markup);
        let markup = render(&Page, fragments);
        assert!(markup.contains("&lt;"));
        assert!(!markup.contains("<div>"));
    }

    #[test]
    fn document_is_a_complete_page() {
        let result = document("sample.js", "<span class=\"keyword\">var</span>");
        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("<title>sample.js</title>"));
        assert!(result.contains("<span class=\"keyword\">var</span>"));
        assert!(result.contains("</html>"));
    }
}
