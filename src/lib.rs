//! Builds the blog section of a small static site.
//!
//! `convert-posts` turns Markdown posts into pages and records what it wrote;
//! `update-site` uses those records to rebuild the blog index and makes sure
//! every page links to it.

pub mod config;
pub mod generator;
pub mod metadata;
pub mod patcher;
pub mod records;
mod renderer;

pub use config::SiteConfig;
pub use metadata::PostRecord;
