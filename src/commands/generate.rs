//! Generate static files

use anyhow::{Context, Result};
use std::time::Instant;

use crate::api::ContentClient;
use crate::feed::{self, PostFeed};
use crate::generator::Generator;
use crate::Stellar;

/// Generate the static site.
///
/// The index embeds only the first query page plus its cursor; path
/// enumeration walks every page so each known post is pre-built. Any fetch
/// failure here is fatal - generation aborts with no partial output.
pub async fn run(stellar: &Stellar) -> Result<()> {
    let start = Instant::now();

    let client = ContentClient::new(&stellar.config.api);
    let page_size = stellar.config.api.page_size;

    let first_page = client
        .query_first_page(page_size)
        .await
        .context("failed to fetch the initial feed")?;
    let (items, cursor) = first_page.into_page();
    let initial_feed = PostFeed::new(items, cursor);

    tracing::info!(
        "Initial feed: {} posts, more pages: {}",
        initial_feed.len(),
        initial_feed.has_more()
    );

    // Walk the remaining pages to enumerate every post path
    let mut all_posts = initial_feed.clone();
    while all_posts.has_more() {
        feed::load_more(&mut all_posts, &client)
            .await
            .context("failed to enumerate post pages")?;
    }

    tracing::info!("Enumerated {} posts", all_posts.len());

    let mut details = Vec::with_capacity(all_posts.len());
    for summary in all_posts.entries() {
        let detail = client
            .get_by_uid(&summary.uid)
            .await
            .with_context(|| format!("failed to fetch post {:?}", summary.uid))?;
        details.push(detail);
    }

    let generator = Generator::new(stellar)?;
    generator.generate(&initial_feed, &details)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
