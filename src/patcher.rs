use std::{
    fmt,
    path::{Path, PathBuf},
};

use kuchikiki::NodeRef;
use log::{info, warn};

use crate::{config::SiteConfig, records::load_records};

mod dom;
mod footer;
mod header;
mod listing;

pub use footer::patch_footer;
pub use header::patch_header;
pub use listing::{excerpt, rebuild_listing, ListingOutcome};

/// What a link patch did to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Added,
    AlreadyPresent,
    FooterNotFound,
    QuickLinksNotFound,
    DropdownNotFound,
}

impl PatchOutcome {
    pub fn is_change(self) -> bool {
        self == Self::Added
    }

    /// The page didn't have the structure the patch looks for.
    pub fn is_skip(self) -> bool {
        !matches!(self, Self::Added | Self::AlreadyPresent)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Added => "link added",
            Self::AlreadyPresent => "link already exists, skipping",
            Self::FooterNotFound => "no footer found, skipping",
            Self::QuickLinksNotFound => "quick links heading or list not found, skipping",
            Self::DropdownNotFound => "nav dropdown not found, skipping",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

#[derive(Debug)]
pub struct SiteReport {
    pub listing: ListingOutcome,
    pub footer: Vec<PageReport>,
    pub header: Vec<PageReport>,
}

impl SiteReport {
    pub fn skipped(&self) -> usize {
        self.footer
            .iter()
            .chain(self.header.iter())
            .filter(|report| report.outcome.is_skip())
            .count()
    }
}

/// Applies `patch` to every `.html` page below `root`.
///
/// Each page is parsed and patched on its own; it is only written back when
/// the patch reports a change. A page without the expected structure is
/// reported and left as it was.
pub fn patch_pages<F>(root: &Path, area: &str, patch: F) -> anyhow::Result<Vec<PageReport>>
where
    F: Fn(&NodeRef) -> anyhow::Result<PatchOutcome>,
{
    let mut reports = vec![];
    for path in dom::html_files(root)? {
        let document = dom::parse_page(&path)?;
        let outcome = patch(&document)?;
        if outcome.is_change() {
            dom::write_page(&path, &document)?;
        }

        if outcome.is_skip() {
            warn!("{area} of {path:?}: {outcome}");
        } else {
            info!("{area} of {path:?}: {outcome}");
        }
        reports.push(PageReport { path, outcome });
    }
    Ok(reports)
}

/// Regenerates the listing block of the index page from the records file.
pub fn update_listing(config: &SiteConfig) -> anyhow::Result<ListingOutcome> {
    let records = load_records(&config.records_path())?;
    let index_path = config.index_path();

    let document = dom::parse_page(&index_path)?;
    let outcome = rebuild_listing(&document, &records, &config.blog_dir, &config.listing)?;
    match outcome {
        ListingOutcome::Rebuilt(count) => {
            dom::write_page(&index_path, &document)?;
            info!("Updated {index_path:?} with {count} blog posts.");
        }
        ListingOutcome::ContainerNotFound => {
            warn!(
                "{} not found in {index_path:?}, listing not updated.",
                config.listing.container
            );
        }
    }
    Ok(outcome)
}

/// Rebuilds the listing, then patches footer and header links site-wide.
pub fn update_site(config: &SiteConfig) -> anyhow::Result<SiteReport> {
    let listing = update_listing(config)?;
    let footer = patch_pages(&config.site_root, "footer", |document| {
        patch_footer(document, &config.links)
    })?;
    let header = patch_pages(&config.site_root, "header", |document| {
        patch_header(document, &config.links)
    })?;
    info!("Site update complete.");

    Ok(SiteReport {
        listing,
        footer,
        header,
    })
}
