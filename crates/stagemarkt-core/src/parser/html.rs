//! Plain text rendering of rich-text fields
//!
//! Descriptions, skills and offerings arrive as HTML fragments.

use scraper::{ElementRef, Html, Node};

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

/// Converts an HTML fragment to plain text
///
/// Block elements become line breaks, list items get a `- ` prefix and
/// runs of whitespace inside a line collapse to one space.
///
/// # Example
/// ```
/// use stagemarkt_core::parser::html::html_to_text;
/// let text = html_to_text("<p>Wij bieden:</p><ul><li>Reiskosten</li><li>Lunch</li></ul>");
/// assert_eq!(text, "Wij bieden:\n- Reiskosten\n- Lunch");
/// ```
pub fn html_to_text(html: &str) -> String {
    if !html.contains('<') {
        return collapse_lines(html);
    }

    let fragment = Html::parse_fragment(html);
    let mut raw = String::new();
    walk(fragment.root_element(), &mut raw);
    collapse_lines(&raw)
}

fn walk(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = child.value().name();
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push('\n');
                }
                if name == "li" {
                    out.push_str("- ");
                }
                walk(child, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
