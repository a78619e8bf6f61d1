//! Generator module - renders the index feed and post pages to static HTML
//!
//! The generator is pure given its inputs: all fetching happens in the
//! generate command (or the server's fallback path), which hands fetched
//! data in. A template or filesystem error aborts generation with no
//! partial-output recovery.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use tera::Context;

use crate::content::{readtime, PostDetail, PostSummary};
use crate::feed::PostFeed;
use crate::helpers::{date, url};
use crate::templates::{BlockData, ConfigData, FeedPageData, PostRow, TemplateRenderer};
use crate::Stellar;

/// Static site generator using embedded Tera templates
pub struct Generator {
    stellar: Stellar,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(stellar: &Stellar) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            stellar: stellar.clone(),
            renderer,
        })
    }

    /// Generate the entire site: the index seeded with the initial feed,
    /// plus one page per known post
    pub fn generate(&self, initial_feed: &PostFeed, posts: &[PostDetail]) -> Result<()> {
        fs::create_dir_all(&self.stellar.public_dir)?;

        self.generate_index(initial_feed)?;

        for post in posts {
            self.generate_post_page(post)?;
        }

        tracing::info!(
            "Generated index ({} posts in initial feed) and {} post pages",
            initial_feed.len(),
            posts.len()
        );

        Ok(())
    }

    /// Generate the index page with the initial feed embedded.
    ///
    /// The "load more" control is rendered only while the feed has a
    /// cursor; its target carries the cursor into the feed endpoint.
    pub fn generate_index(&self, feed: &PostFeed) -> Result<()> {
        let rows: Vec<PostRow> = feed.entries().iter().map(|p| self.post_row(p)).collect();
        let feed_url = feed
            .cursor()
            .map(|cursor| url::feed_endpoint_url(&self.stellar.config, cursor));

        let mut context = self.base_context();
        context.insert("posts", &rows);
        context.insert("feed_url", &feed_url);

        let html = self.renderer.render("index.html", &context)?;

        let output_path = self.stellar.public_dir.join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate a single post page and return its output path.
    ///
    /// Also the on-demand path used by the server for slugs that were not
    /// pre-built.
    pub fn generate_post_page(&self, post: &PostDetail) -> Result<PathBuf> {
        let blocks: Vec<BlockData> = post
            .content
            .iter()
            .map(|block| BlockData {
                heading: block.heading.clone(),
                body_html: block.body.as_html(),
            })
            .collect();

        let mut context = self.base_context();
        context.insert("post_title", &post.title);
        context.insert("post_date", &self.display_date(&post.first_publication_date));
        context.insert("post_author", &post.author);
        context.insert("banner_url", &post.banner_url);
        context.insert("reading_time", &readtime::estimate(&post.content));
        context.insert("blocks", &blocks);

        let html = self.renderer.render("post.html", &context)?;

        let output_path = self
            .stellar
            .public_dir
            .join("post")
            .join(&post.uid)
            .join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated post: {:?}", output_path);

        Ok(output_path)
    }

    /// Project a summary onto an index row with a formatted date
    pub fn post_row(&self, post: &PostSummary) -> PostRow {
        PostRow {
            url: url::url_for(&self.stellar.config, &post.path()),
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            date: self.display_date(&post.first_publication_date),
            author: post.author.clone(),
        }
    }

    /// Build one feed-endpoint page body from fetched items
    pub fn feed_page(
        &self,
        items: &[PostSummary],
        next_cursor: Option<&str>,
    ) -> FeedPageData {
        FeedPageData {
            results: items.iter().map(|p| self.post_row(p)).collect(),
            next_page_url: next_cursor
                .map(|cursor| url::feed_endpoint_url(&self.stellar.config, cursor)),
        }
    }

    fn display_date(&self, date: &Option<chrono::DateTime<chrono::Utc>>) -> String {
        date.map(|d| date::format_date(&d, &self.stellar.config.date_format))
            .unwrap_or_default()
    }

    fn base_context(&self) -> Context {
        let config = &self.stellar.config;
        let mut context = Context::new();
        context.insert(
            "config",
            &ConfigData {
                title: config.title.clone(),
                subtitle: config.subtitle.clone(),
                description: config.description.clone(),
                author: config.author.clone(),
                language: config.language.clone(),
                root: config.root.clone(),
            },
        );
        context.insert("home_url", &url::url_for(config, ""));
        context
    }
}
