//! Markdown to HTML conversion.
//!
//! Conversion is delegated entirely to `pulldown-cmark`; this module only
//! fixes the parser options the manual relies on. Tables are enabled
//! explicitly, fenced code blocks are core CommonMark. Raw HTML in the
//! source (the inlined `<img>` elements and the missing-image comments
//! produced by the placeholder pass) streams through unchanged.

use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown text into an HTML fragment.
///
/// The fragment has no document shell; see [`crate::template::compose`] for
/// the wrapping step.
pub fn to_html_fragment(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut fragment = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut fragment, parser);
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let fragment = to_html_fragment("# Title\n\nBody text.");
        assert!(fragment.contains("<h1>Title</h1>"));
        assert!(fragment.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_table_produces_table_element() {
        let fragment = to_html_fragment("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(fragment.contains("<table>"));
        assert!(fragment.contains("<th>a</th>"));
        assert!(fragment.contains("<td>1</td>"));
    }

    #[test]
    fn test_fenced_code_produces_pre_code() {
        let fragment = to_html_fragment("```\nlet x = 1;\n```");
        assert!(fragment.contains("<pre><code>"));
        assert!(fragment.contains("let x = 1;"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let fragment = to_html_fragment(
            "before\n\n<img src=\"data:image/png;base64,QUJD\" class=\"screenshot\" />\n\nafter",
        );
        assert!(fragment.contains("<img src=\"data:image/png;base64,QUJD\" class=\"screenshot\" />"));
    }

    #[test]
    fn test_html_comment_passes_through() {
        let fragment = to_html_fragment("text\n\n<!-- Image not found: ghost.png -->\n\nmore");
        assert!(fragment.contains("<!-- Image not found: ghost.png -->"));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let md = "# T\n\n| a |\n|---|\n| 1 |\n\n```\ncode\n```";
        assert_eq!(to_html_fragment(md), to_html_fragment(md));
    }
}
