//! Regeneration of the blog index listing.
//!
//! The listing block is owned by this module: every child of the container is
//! dropped and rebuilt from the records on each run, so hand edits made inside
//! it do not survive. Content outside the container is left alone.

use kuchikiki::NodeRef;
use maud::{html, Markup};

use super::dom::fragment;
use crate::{config::ListingConfig, metadata::PostRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    Rebuilt(usize),
    ContainerNotFound,
}

/// Caps `description` at `limit` characters, marking the cut with `...`.
pub fn excerpt(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

fn entry(record: &PostRecord, blog_dir: &str, listing: &ListingConfig) -> Markup {
    let href = format!("{}/{}", blog_dir.trim_end_matches('/'), record.file_name);
    html! {
        article.blog-post {
            div.post-meta { (listing.meta_label) }
            h3 { a href=(href) { (record.title) } }
            p { (excerpt(&record.description, listing.excerpt_limit)) }
            a.read-more href=(href) { (listing.read_more_label) }
        }
    }
}

pub fn rebuild_listing(
    document: &NodeRef,
    records: &[PostRecord],
    blog_dir: &str,
    listing: &ListingConfig,
) -> anyhow::Result<ListingOutcome> {
    let Ok(container) = document.select_first(&listing.container) else {
        return Ok(ListingOutcome::ContainerNotFound);
    };
    let container = container.as_node();

    for child in container.children().collect::<Vec<_>>() {
        child.detach();
    }
    for record in records {
        container.append(fragment(entry(record, blog_dir, listing), "article")?);
    }

    Ok(ListingOutcome::Rebuilt(records.len()))
}
