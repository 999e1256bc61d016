//! Page text extraction
//!
//! The keyword predicate runs over the visible text of a page, not the raw
//! markup, so keywords hiding in tag names, attributes, scripts, or styles
//! never produce a match. Non-HTML bodies degrade gracefully: the parser
//! yields whatever text nodes exist, which for plain text is the body itself.

use scraper::{Html, Node};

/// Extracts the visible text content of an HTML body
///
/// Text nodes are concatenated in document order, separated by single
/// spaces. `<script>` and `<style>` subtrees are skipped entirely.
pub fn extract_text(body: &str) -> String {
    let document = Html::parse_document(body);
    let mut text = String::new();
    let mut stack = vec![document.tree.root()];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(chunk) => {
                let chunk = chunk.trim();
                if !chunk.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(chunk);
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    continue;
                }
                // Reverse so children pop in document order
                stack.extend(node.children().rev());
            }
            _ => stack.extend(node.children().rev()),
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let html = "<html><body><h1>Horse</h1><p>racing news</p></body></html>";
        assert_eq!(extract_text(html), "Horse racing news");
    }

    #[test]
    fn test_skips_script_and_style() {
        let html = r#"<html><head>
            <style>.horse { color: red; }</style>
            <script>var equine = 1;</script>
        </head><body>dogs only</body></html>"#;
        assert_eq!(extract_text(html), "dogs only");
    }

    #[test]
    fn test_attributes_are_not_text() {
        let html = r#"<a href="horse.html" title="equine">pony pictures</a>"#;
        assert_eq!(extract_text(html), "pony pictures");
    }

    #[test]
    fn test_plain_text_falls_through() {
        assert_eq!(extract_text("just some equine text"), "just some equine text");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_document_order() {
        let html = "<div><span>first</span><span>second</span></div><p>third</p>";
        assert_eq!(extract_text(html), "first second third");
    }
}
