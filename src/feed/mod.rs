//! The post feed: an append-only log of summaries plus a pagination cursor
//!
//! A `PostFeed` belongs to one page-view session. It is seeded with the
//! first query page, grows only by appending further pages, and is done when
//! the cursor is gone. Loads go through an explicit single-in-flight guard:
//! `begin_load` hands out the cursor at most once until the load finishes or
//! aborts, so a duplicate trigger is ignored instead of racing.

use crate::api::{ApiError, ContentClient};
use crate::content::PostSummary;

/// Append-only feed of post summaries with its pagination cursor
#[derive(Debug, Clone, Default)]
pub struct PostFeed {
    entries: Vec<PostSummary>,
    cursor: Option<String>,
    in_flight: bool,
}

impl PostFeed {
    /// Seed a feed from an initial page of results
    pub fn new(entries: Vec<PostSummary>, cursor: Option<String>) -> Self {
        Self {
            entries,
            cursor,
            in_flight: false,
        }
    }

    /// Entries in fetch order
    pub fn entries(&self) -> &[PostSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor, if pagination is not exhausted
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Whether another page can still be loaded.
    ///
    /// An absent cursor is the terminal state; the "load more" control must
    /// not be rendered once this is false.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Claim the cursor for a load.
    ///
    /// Returns `None` when pagination is exhausted or a load is already in
    /// flight; the duplicate trigger is dropped, not queued.
    pub fn begin_load(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.in_flight = true;
        Some(cursor)
    }

    /// Append a completed page and release the guard
    pub fn finish_load(&mut self, items: Vec<PostSummary>, cursor: Option<String>) {
        self.append(items, cursor);
        self.in_flight = false;
    }

    /// Release the guard without appending; the stored cursor is untouched
    /// so the same page can be retried
    pub fn abort_load(&mut self) {
        self.in_flight = false;
    }

    /// Append items and replace the cursor.
    ///
    /// Insertion order is fetch order; nothing is deduplicated or reordered.
    pub fn append(&mut self, items: Vec<PostSummary>, cursor: Option<String>) {
        self.entries.extend(items);
        self.cursor = cursor;
    }
}

/// Perform one "load more" step against the content service.
///
/// Returns the number of appended entries; `Ok(0)` without any request when
/// the feed is exhausted or a load is already pending. A failed fetch or
/// decode releases the guard and surfaces the error, leaving the feed as it
/// was so the caller can retry.
pub async fn load_more(feed: &mut PostFeed, client: &ContentClient) -> Result<usize, ApiError> {
    let Some(cursor) = feed.begin_load() else {
        return Ok(0);
    };

    match client.fetch_cursor(&cursor).await {
        Ok(page) => {
            let (items, next) = page.into_page();
            let count = items.len();
            feed.finish_load(items, next);
            Ok(count)
        }
        Err(err) => {
            feed.abort_load();
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(uid: &str) -> PostSummary {
        PostSummary {
            uid: uid.to_string(),
            first_publication_date: None,
            title: format!("Title of {}", uid),
            subtitle: "sub".to_string(),
            author: "author".to_string(),
        }
    }

    #[test]
    fn test_append_extends_and_replaces_cursor() {
        let mut feed = PostFeed::new(vec![summary("a"), summary("b")], Some("p2".into()));

        feed.append(vec![summary("c"), summary("d")], None);

        assert_eq!(feed.len(), 4);
        let uids: Vec<&str> = feed.entries().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, ["a", "b", "c", "d"]);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_exhausted_feed_suppresses_loads() {
        let mut feed = PostFeed::new(vec![summary("a")], None);
        assert!(!feed.has_more());
        assert!(feed.begin_load().is_none());
    }

    #[test]
    fn test_begin_load_claims_cursor_once() {
        let mut feed = PostFeed::new(vec![], Some("p2".into()));

        assert_eq!(feed.begin_load().as_deref(), Some("p2"));
        // duplicate trigger while in flight is ignored
        assert!(feed.begin_load().is_none());

        feed.finish_load(vec![summary("a")], Some("p3".into()));
        assert_eq!(feed.begin_load().as_deref(), Some("p3"));
    }

    #[test]
    fn test_abort_load_allows_retry_of_same_page() {
        let mut feed = PostFeed::new(vec![summary("a")], Some("p2".into()));

        assert_eq!(feed.begin_load().as_deref(), Some("p2"));
        feed.abort_load();

        // nothing appended, same cursor handed out again
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.begin_load().as_deref(), Some("p2"));
    }

    #[test]
    fn test_two_then_two_posts_reaches_terminal_state() {
        let mut feed = PostFeed::new(vec![summary("a"), summary("b")], Some("p2".into()));
        assert!(feed.has_more());

        let cursor = feed.begin_load().unwrap();
        assert_eq!(cursor, "p2");
        feed.finish_load(vec![summary("c"), summary("d")], None);

        assert_eq!(feed.len(), 4);
        assert!(!feed.has_more());
        assert!(feed.begin_load().is_none());
    }
}
