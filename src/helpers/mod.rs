//! Helper functions shared by templates and commands

pub mod date;
pub mod url;

pub use date::format_date;
pub use url::{feed_endpoint_url, url_for};
