use kuchikiki::NodeRef;
use maud::html;

use super::{
    dom::{anchors, fragment, has_text, href, links_to},
    PatchOutcome,
};
use crate::config::LinkConfig;

const DROPDOWN: &str = "li.nav-dropdown";
const DROPDOWN_MENU: &str = "div.dropdown-menu";

/// Adds the blog link to the labelled nav dropdown, right after the
/// `insert_after_href` entry when the menu has one.
pub fn patch_header(document: &NodeRef, links: &LinkConfig) -> anyhow::Result<PatchOutcome> {
    // first dropdown carrying the label wins, even if it has no menu
    let menu = document
        .select(DROPDOWN)
        .into_iter()
        .flatten()
        .find(|dropdown| {
            anchors(dropdown.as_node()).any(|a| has_text(&a, &links.dropdown_label))
        })
        .and_then(|dropdown| dropdown.as_node().select_first(DROPDOWN_MENU).ok());
    let Some(menu) = menu else {
        return Ok(PatchOutcome::DropdownNotFound);
    };

    if links_to(menu.as_node(), &links.blog_href) {
        return Ok(PatchOutcome::AlreadyPresent);
    }

    let link = fragment(html! { a href=(links.blog_href) { (links.blog_label) } }, "a")?;
    let anchor = anchors(menu.as_node())
        .find(|a| href(a).as_deref() == Some(links.insert_after_href.as_str()));
    match anchor {
        Some(anchor) => anchor.as_node().insert_after(link),
        None => menu.as_node().append(link),
    }

    Ok(PatchOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchikiki::traits::*;

    const NAV: &str = concat!(
        "<header><nav><ul>",
        "<li class=\"nav-dropdown\"><a href=\"#\">Resources</a>",
        "<div class=\"dropdown-menu\"><a href=\"audit.html\">Audit</a></div></li>",
        "<li class=\"nav-dropdown\"><a href=\"#\">Insights</a>",
        "<div class=\"dropdown-menu\">",
        "<a href=\"catering-profit.html\">Catering</a>",
        "<a href=\"login.html\">Course Login</a>",
        "<a href=\"newsletter.html\">Newsletter</a>",
        "</div></li>",
        "</ul></nav></header>"
    );

    fn patch(html: &str) -> (PatchOutcome, String) {
        let document = kuchikiki::parse_html().one(html);
        let outcome = patch_header(&document, &LinkConfig::default()).unwrap();
        (outcome, document.to_string())
    }

    #[test]
    fn test_inserts_after_course_login() {
        let (outcome, html) = patch(NAV);
        assert_eq!(outcome, PatchOutcome::Added);
        assert!(html.contains(concat!(
            "<a href=\"login.html\">Course Login</a>",
            "<a href=\"blog.html\">Blog</a>",
            "<a href=\"newsletter.html\">Newsletter</a>"
        )));
        // the other dropdown is untouched
        assert!(html.contains(
            "<div class=\"dropdown-menu\"><a href=\"audit.html\">Audit</a></div>"
        ));
    }

    #[test]
    fn test_appends_without_course_login() {
        let (outcome, html) = patch(concat!(
            "<ul><li class=\"nav-dropdown\"><a href=\"#\">Insights</a>",
            "<div class=\"dropdown-menu\"><a href=\"x.html\">X</a></div></li></ul>"
        ));
        assert_eq!(outcome, PatchOutcome::Added);
        assert!(html.contains(
            "<div class=\"dropdown-menu\"><a href=\"x.html\">X</a><a href=\"blog.html\">Blog</a></div>"
        ));
    }

    #[test]
    fn test_second_pass_finds_its_own_link() {
        let (first, html) = patch(NAV);
        assert_eq!(first, PatchOutcome::Added);

        let (second, again) = patch(&html);
        assert_eq!(second, PatchOutcome::AlreadyPresent);
        assert_eq!(again, html);
        assert_eq!(again.matches("href=\"blog.html\"").count(), 1);
    }

    #[test]
    fn test_reports_missing_dropdown() {
        assert_eq!(
            patch("<nav><a href=\"#\">Insights</a></nav>").0,
            PatchOutcome::DropdownNotFound
        );
        assert_eq!(
            patch("<ul><li class=\"nav-dropdown\"><a href=\"#\">Insights</a></li></ul>").0,
            PatchOutcome::DropdownNotFound
        );
        assert_eq!(
            patch(concat!(
                "<ul><li class=\"nav-dropdown\"><a href=\"#\">Resources</a>",
                "<div class=\"dropdown-menu\"></div></li></ul>"
            ))
            .0,
            PatchOutcome::DropdownNotFound
        );
    }
}
