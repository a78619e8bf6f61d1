//! Wire types for the content service query API
//!
//! The service answers queries with `{ results: [...], next_page: url|null }`.
//! Decoding is strict about the fields this blog needs (a missing `uid` or
//! `title` is a decode error, not a silently empty value) and ignores
//! everything else a record may carry.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::content::richtext::RichText;
use crate::content::{ContentBlock, PostDetail, PostSummary};

/// One page of a paginated query
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Cursor URL of the next page; null on the last page
    #[serde(default)]
    pub next_page: Option<String>,

    pub results: Vec<RawDocument>,
}

impl QueryResponse {
    /// Project the page onto feed summaries plus its cursor.
    ///
    /// Only {uid, first_publication_date, title, subtitle, author} survive;
    /// every other field of a raw record is dropped.
    pub fn into_page(self) -> (Vec<PostSummary>, Option<String>) {
        let items = self
            .results
            .into_iter()
            .map(RawDocument::into_summary)
            .collect();
        (items, self.next_page)
    }
}

/// A raw document record as returned by the service
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub uid: String,

    #[serde(default)]
    pub first_publication_date: Option<DateTime<Utc>>,

    pub data: RawData,
}

/// The `data` envelope of a raw document
#[derive(Debug, Clone, Deserialize)]
pub struct RawData {
    pub title: String,
    pub subtitle: String,
    pub author: String,

    #[serde(default)]
    pub banner: Option<RawBanner>,

    #[serde(default)]
    pub content: Vec<RawBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBanner {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: RichText,
}

impl RawDocument {
    /// Project down to the five summary fields
    pub fn into_summary(self) -> PostSummary {
        PostSummary {
            uid: self.uid,
            first_publication_date: self.first_publication_date,
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
        }
    }

    /// Map to a full post detail
    pub fn into_detail(self) -> PostDetail {
        PostDetail {
            uid: self.uid,
            first_publication_date: self.first_publication_date,
            title: self.data.title,
            subtitle: self.data.subtitle,
            author: self.data.author,
            banner_url: self.data.banner.map(|b| b.url).unwrap_or_default(),
            content: self
                .data
                .content
                .into_iter()
                .map(|block| ContentBlock {
                    heading: block.heading,
                    body: block.body,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "page": 1,
        "results_per_page": 2,
        "total_results_size": 5,
        "next_page": "https://cms.example.com/documents/search?page=2",
        "results": [
            {
                "id": "Xyz123",
                "uid": "first-post",
                "type": "post",
                "href": "https://cms.example.com/documents/Xyz123",
                "first_publication_date": "2021-03-15T19:25:28+00:00",
                "last_publication_date": "2021-03-16T10:00:00+00:00",
                "data": {
                    "title": "First Post",
                    "subtitle": "All about it",
                    "author": "Jane Roe",
                    "banner": { "url": "https://images.example.com/banner.png" },
                    "content": [
                        {
                            "heading": "Intro",
                            "body": [{ "type": "paragraph", "text": "hello world" }]
                        }
                    ]
                }
            },
            {
                "uid": "second-post",
                "first_publication_date": null,
                "data": {
                    "title": "Second Post",
                    "subtitle": "More of it",
                    "author": "John Doe"
                }
            }
        ]
    }"#;

    #[test]
    fn test_decode_query_page() {
        let page: QueryResponse = serde_json::from_str(PAGE).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(
            page.next_page.as_deref(),
            Some("https://cms.example.com/documents/search?page=2")
        );
    }

    #[test]
    fn test_summary_projects_only_five_fields() {
        let page: QueryResponse = serde_json::from_str(PAGE).unwrap();
        let (items, cursor) = page.into_page();

        assert!(cursor.is_some());
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.uid, "first-post");
        assert_eq!(first.title, "First Post");
        assert_eq!(first.subtitle, "All about it");
        assert_eq!(first.author, "Jane Roe");
        assert!(first.first_publication_date.is_some());

        // extra record fields (id, href, banner, content, ...) are gone
        let json = serde_json::to_value(first).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            ["uid", "first_publication_date", "title", "subtitle", "author"]
        );
    }

    #[test]
    fn test_null_publication_date_decodes_to_none() {
        let page: QueryResponse = serde_json::from_str(PAGE).unwrap();
        assert!(page.results[1].first_publication_date.is_none());
    }

    #[test]
    fn test_missing_title_is_a_decode_error() {
        let json = r#"{
            "next_page": null,
            "results": [
                { "uid": "broken", "data": { "subtitle": "s", "author": "a" } }
            ]
        }"#;
        assert!(serde_json::from_str::<QueryResponse>(json).is_err());
    }

    #[test]
    fn test_into_detail_maps_banner_and_blocks() {
        let page: QueryResponse = serde_json::from_str(PAGE).unwrap();
        let detail = page.results[0].clone().into_detail();
        assert_eq!(detail.banner_url, "https://images.example.com/banner.png");
        assert_eq!(detail.content.len(), 1);
        assert_eq!(detail.content[0].heading, "Intro");
        assert_eq!(detail.content[0].body.as_text(), "hello world");
    }

    #[test]
    fn test_into_detail_without_banner() {
        let page: QueryResponse = serde_json::from_str(PAGE).unwrap();
        let detail = page.results[1].clone().into_detail();
        assert_eq!(detail.banner_url, "");
        assert!(detail.content.is_empty());
    }
}
