//! Link extraction
//!
//! The traversal engine does not depend on any particular HTML parser: it
//! takes anything implementing [`LinkExtractor`]. The default
//! implementation here uses the scraper crate.

use scraper::{Html, Selector};

/// Capability seam between traversal and HTML parsing: raw HTML in, anchor
/// href strings out.
///
/// Implementations return hrefs as written in the page; resolving them
/// against the page URL is the caller's job. Any `Fn(&str) -> Vec<String>`
/// qualifies, which keeps test stubs to a one-line closure.
pub trait LinkExtractor {
    fn extract_links(&self, html: &str) -> Vec<String>;
}

impl<F> LinkExtractor for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn extract_links(&self, html: &str) -> Vec<String> {
        self(html)
    }
}

/// Default extractor: every `<a href>` in the document, minus non-page
/// schemes (`javascript:`, `mailto:`, `tel:`, `data:`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        if let Ok(selector) = Selector::parse("a[href]") {
            for element in document.select(&selector) {
                if let Some(href) = element.value().attr("href") {
                    let href = href.trim();
                    if href.is_empty() || has_non_page_scheme(href) {
                        continue;
                    }
                    links.push(href.to_string());
                }
            }
        }

        links
    }
}

fn has_non_page_scheme(href: &str) -> bool {
    ["javascript:", "mailto:", "tel:", "data:"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<html><body><a href="https://example.com/page">Link</a></body></html>"#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_extract_relative_links_verbatim() {
        let html = r#"<html><body><a href="/about">About</a><a href="next">Next</a></body></html>"#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["/about", "next"]);
    }

    #[test]
    fn test_multiple_links_in_document_order() {
        let html = r#"
            <html><body>
                <a href="/first">1</a>
                <a href="/second">2</a>
                <a href="/third">3</a>
            </body></html>
        "#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_skips_non_page_schemes() {
        let html = r#"
            <html><body>
                <a href="javascript:void(0)">js</a>
                <a href="mailto:someone@example.com">mail</a>
                <a href="tel:+1234567890">call</a>
                <a href="data:text/html,hi">data</a>
                <a href="/real">real</a>
            </body></html>
        "#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["/real"]);
    }

    #[test]
    fn test_skips_empty_href() {
        let html = r#"<html><body><a href="">empty</a><a href="  ">blank</a></body></html>"#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let html = r#"<html><body><a name="top">anchor</a></body></html>"#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert!(links.is_empty());
    }

    #[test]
    fn test_fragment_href_kept_for_normalization() {
        // The engine's normalization resolves these back to the page itself
        let html = r##"<html><body><a href="#section">jump</a></body></html>"##;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["#section"]);
    }

    #[test]
    fn test_malformed_html_still_yields_links() {
        let html = r#"<body><a href="/page">unclosed"#;
        let links = HtmlLinkExtractor.extract_links(html);
        assert_eq!(links, vec!["/page"]);
    }

    #[test]
    fn test_closure_as_extractor() {
        let stub = |_: &str| vec!["/stubbed".to_string()];
        assert_eq!(stub.extract_links("<html></html>"), vec!["/stubbed"]);
    }
}
