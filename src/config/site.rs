//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,

    // Content service
    #[serde(default)]
    pub api: ApiConfig,

    // Date format shown on feed rows and post headers (Moment.js tokens)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Stellar".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),

            api: ApiConfig::default(),

            date_format: "DD MMM YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Content service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the content service API
    pub endpoint: String,

    /// Document type queried for posts
    pub document_type: String,

    /// Posts per page in the initial feed and each "load more" step
    pub page_size: usize,

    /// Optional access token appended to query calls
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://example.cdn.prismic.io/api/v2".to_string(),
            document_type: "post".to_string(),
            page_size: 2,
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.root, "/");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.api.document_type, "post");
        assert_eq!(config.api.page_size, 2);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
api:
  endpoint: https://blog.cdn.example.com/api/v2
  page_size: 5
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.api.endpoint, "https://blog.cdn.example.com/api/v2");
        assert_eq!(config.api.page_size, 5);
        // unset sections keep their defaults
        assert_eq!(config.api.document_type, "post");
        assert_eq!(config.date_format, "DD MMM YYYY");
    }
}
