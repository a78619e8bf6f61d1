//! Built-in theme templates using the Tera template engine
//!
//! The theme is embedded directly in the binary; there is no on-disk theme
//! directory to resolve.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies arrive pre-rendered as HTML; escaping is explicit in
        // the templates instead
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub root: String,
}

/// One row of the index feed, dates already formatted
#[derive(Debug, Clone, Serialize)]
pub struct PostRow {
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub author: String,
}

/// One "load more" page as served by the feed endpoint and consumed by the
/// index page script
#[derive(Debug, Clone, Serialize)]
pub struct FeedPageData {
    pub results: Vec<PostRow>,
    /// Endpoint URL for the following page; null in the terminal state
    pub next_page_url: Option<String>,
}

/// One body section of a post page
#[derive(Debug, Clone, Serialize)]
pub struct BlockData {
    pub heading: String,
    pub body_html: String,
}
