//! URL helper functions

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "post/my-post/") // -> "/blog/post/my-post/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Build the "load more" endpoint URL for a pagination cursor.
///
/// The cursor is an opaque URL itself, so it is carried percent-encoded in
/// the query string.
pub fn feed_endpoint_url(config: &SiteConfig, cursor: &str) -> String {
    let encoded = utf8_percent_encode(cursor, NON_ALPHANUMERIC);
    url_for(config, &format!("api/feed?cursor={}", encoded))
}
