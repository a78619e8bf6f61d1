//! Post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::richtext::RichText;

/// A post as it appears in the index feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    /// Document uid, also the URL slug
    pub uid: String,

    /// First publication date; null for documents never published
    pub first_publication_date: Option<DateTime<Utc>>,

    /// Post title
    pub title: String,

    /// Post subtitle
    pub subtitle: String,

    /// Author name
    pub author: String,
}

impl PostSummary {
    /// URL path of the post page (without root)
    pub fn path(&self) -> String {
        format!("post/{}/", self.uid)
    }
}

/// One section of a post body: a heading followed by rich text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    pub heading: String,
    pub body: RichText,
}

/// A full post as rendered on its own page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub uid: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,

    /// Banner image URL; empty when the document has none
    pub banner_url: String,

    /// Ordered body sections
    pub content: Vec<ContentBlock>,
}

impl PostDetail {
    /// Project the detail down to its feed summary
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            uid: self.uid.clone(),
            first_publication_date: self.first_publication_date,
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            author: self.author.clone(),
        }
    }
}
