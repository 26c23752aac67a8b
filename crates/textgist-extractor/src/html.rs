//! Readable text from fetched HTML pages
//!
//! Only headings, paragraphs and list items are kept. Everything inside
//! navigation chrome and non-content elements is dropped, whether it wraps a
//! content element or sits inside one.

use crate::error::ExtractError;
use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never reaches the summary
pub const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer", "header", "aside"];

/// Elements text is taken from
pub const CONTENT_SELECTOR: &str = "h1, h2, h3, p, li";

/// Extract content text from an HTML document
///
/// Each content element contributes its descendant text concatenated as-is;
/// element texts are joined with single spaces in document order.
pub fn html_to_text(html: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CONTENT_SELECTOR)
        .map_err(|e| ExtractError::UrlProcessing(format!("Invalid selector: {}", e)))?;

    let blocks: Vec<String> = document
        .select(&selector)
        .filter(|element| !inside_excluded(element))
        .map(|element| element_text(&element))
        .collect();

    Ok(blocks.join(" "))
}

fn is_excluded(node: &Node) -> bool {
    node.as_element()
        .map_or(false, |element| EXCLUDED_ELEMENTS.contains(&element.name()))
}

fn inside_excluded(element: &ElementRef) -> bool {
    element.ancestors().any(|ancestor| is_excluded(ancestor.value()))
}

fn element_text(element: &ElementRef) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        if let Node::Text(t) = node.value() {
            let hidden = node
                .ancestors()
                .take_while(|ancestor| *ancestor != **element)
                .any(|ancestor| is_excluded(ancestor.value()));
            if !hidden {
                text.push_str(t);
            }
        }
    }
    text
}
