//! Configuration handling

pub mod site;

pub use site::{ApiConfig, SiteConfig};
