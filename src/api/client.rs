//! Async client for the content service
//!
//! The service is treated as an opaque paginated JSON API: a
//! query-by-document-type call and a get-by-uid call, plus raw GETs against
//! `next_page` cursor URLs. Every request is attempted exactly once; there
//! is no retry policy.

use thiserror::Error;

use super::types::QueryResponse;
use crate::config::ApiConfig;
use crate::content::PostDetail;

/// Errors from the content service boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("content service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("content service returned status {0}")]
    Status(u16),

    #[error("failed to decode content service response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no document with uid {0:?}")]
    NotFound(String),
}

/// Content service client
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    endpoint: String,
    document_type: String,
    access_token: Option<String>,
}

impl ContentClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            document_type: config.document_type.clone(),
            access_token: config.access_token.clone(),
        }
    }

    /// Fetch the first page of posts, `page_size` records in service order
    pub async fn query_first_page(&self, page_size: usize) -> Result<QueryResponse, ApiError> {
        let predicate = format!("[[at(document.type,\"{}\")]]", self.document_type);
        let response = self.search_request(&predicate, page_size).send().await?;
        decode_page(response).await
    }

    /// Fetch one page at an opaque cursor URL
    pub async fn fetch_cursor(&self, cursor: &str) -> Result<QueryResponse, ApiError> {
        let response = self.http.get(cursor).send().await?;
        decode_page(response).await
    }

    /// Fetch a single post by its uid
    pub async fn get_by_uid(&self, uid: &str) -> Result<PostDetail, ApiError> {
        let predicate = format!("[[at(my.{}.uid,\"{}\")]]", self.document_type, uid);
        let response = self.search_request(&predicate, 1).send().await?;
        let page = decode_page(response).await?;

        page.results
            .into_iter()
            .next()
            .map(|doc| doc.into_detail())
            .ok_or_else(|| ApiError::NotFound(uid.to_string()))
    }

    /// Build a query request against the search endpoint
    fn search_request(&self, predicate: &str, page_size: usize) -> reqwest::RequestBuilder {
        let url = format!("{}/documents/search", self.endpoint);
        let mut request = self
            .http
            .get(url)
            .query(&[("q", predicate)])
            .query(&[("pageSize", page_size)]);

        if let Some(token) = &self.access_token {
            request = request.query(&[("access_token", token.as_str())]);
        }

        request
    }
}

async fn decode_page(response: reqwest::Response) -> Result<QueryResponse, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
