//! List posts known to the content service

use anyhow::{Context, Result};

use crate::api::ContentClient;
use crate::feed::{self, PostFeed};
use crate::helpers::date;
use crate::Stellar;

/// Print every post the service knows, in service order
pub async fn run(stellar: &Stellar) -> Result<()> {
    let client = ContentClient::new(&stellar.config.api);

    let first_page = client
        .query_first_page(stellar.config.api.page_size)
        .await
        .context("failed to query the content service")?;
    let (items, cursor) = first_page.into_page();
    let mut posts = PostFeed::new(items, cursor);

    while posts.has_more() {
        feed::load_more(&mut posts, &client)
            .await
            .context("failed to fetch a feed page")?;
    }

    println!("Posts ({}):", posts.len());
    for post in posts.entries() {
        let published = post
            .first_publication_date
            .map(|d| date::format_date(&d, "YYYY-MM-DD"))
            .unwrap_or_else(|| "unpublished".to_string());
        println!("  {} - {} [{}]", published, post.title, post.uid);
    }

    Ok(())
}
