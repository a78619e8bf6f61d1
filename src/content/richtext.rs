//! Structured rich text as delivered by the content service
//!
//! A rich text value is an ordered list of typed text nodes. Two renderings
//! exist: a plain-text flattening used by the reading-time estimator, and an
//! HTML rendering used by the post template.

use serde::{Deserialize, Serialize};

/// A rich text value: an ordered sequence of text nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RichText(pub Vec<TextNode>);

/// A single typed node of rich text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub text: String,
}

/// Node types the service emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    ListItem,
    OListItem,
    Preformatted,
    /// Anything this renderer does not know; treated as a paragraph
    #[serde(other)]
    Other,
}

impl RichText {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten to plain text, joining nodes with a single space
    pub fn as_text(&self) -> String {
        self.0
            .iter()
            .map(|node| node.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render to HTML, grouping consecutive list items into a single list
    pub fn as_html(&self) -> String {
        let mut html = String::new();
        let mut open_list: Option<&str> = None;

        for node in &self.0 {
            let list_tag = match node.kind {
                NodeKind::ListItem => Some("ul"),
                NodeKind::OListItem => Some("ol"),
                _ => None,
            };

            if open_list != list_tag {
                if let Some(tag) = open_list {
                    html.push_str(&format!("</{}>", tag));
                }
                if let Some(tag) = list_tag {
                    html.push_str(&format!("<{}>", tag));
                }
                open_list = list_tag;
            }

            let text = escape_html(&node.text);
            match node.kind {
                NodeKind::Heading1 => html.push_str(&format!("<h1>{}</h1>", text)),
                NodeKind::Heading2 => html.push_str(&format!("<h2>{}</h2>", text)),
                NodeKind::Heading3 => html.push_str(&format!("<h3>{}</h3>", text)),
                NodeKind::ListItem | NodeKind::OListItem => {
                    html.push_str(&format!("<li>{}</li>", text))
                }
                NodeKind::Preformatted => html.push_str(&format!("<pre>{}</pre>", text)),
                NodeKind::Paragraph | NodeKind::Other => {
                    html.push_str(&format!("<p>{}</p>", text))
                }
            }
        }

        if let Some(tag) = open_list {
            html.push_str(&format!("</{}>", tag));
        }

        html
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
