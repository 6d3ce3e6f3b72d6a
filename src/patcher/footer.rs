use kuchikiki::{traits::*, ElementData, NodeDataRef, NodeRef};
use maud::html;

use super::{
    dom::{fragment, has_text, is_tag, links_to},
    PatchOutcome,
};
use crate::config::LinkConfig;

/// The list under the heading: a later sibling `<ul>`, or failing that the
/// first `<ul>` in the enclosing `<div>`.
fn link_list(heading: &NodeDataRef<ElementData>) -> Option<NodeDataRef<ElementData>> {
    heading
        .as_node()
        .following_siblings()
        .elements()
        .find(|sibling| is_tag(sibling, "ul"))
        .or_else(|| {
            heading
                .as_node()
                .ancestors()
                .elements()
                .find(|ancestor| is_tag(ancestor, "div"))
                .and_then(|div| div.as_node().select_first("ul").ok())
        })
}

/// Appends the blog link to the footer's quick links list unless it is
/// already there.
pub fn patch_footer(document: &NodeRef, links: &LinkConfig) -> anyhow::Result<PatchOutcome> {
    let Ok(footer) = document.select_first("footer") else {
        return Ok(PatchOutcome::FooterNotFound);
    };

    let list = footer
        .as_node()
        .select("h3, h4")
        .into_iter()
        .flatten()
        .find(|heading| has_text(heading, &links.footer_heading))
        .and_then(|heading| link_list(&heading));
    let Some(list) = list else {
        return Ok(PatchOutcome::QuickLinksNotFound);
    };

    if links_to(list.as_node(), &links.blog_href) {
        return Ok(PatchOutcome::AlreadyPresent);
    }

    let item = fragment(
        html! { ul { li { a href=(links.blog_href) { (links.blog_label) } } } },
        "li",
    )?;
    list.as_node().append(item);

    Ok(PatchOutcome::Added)
}
