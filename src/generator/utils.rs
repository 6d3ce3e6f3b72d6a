use std::{path::Path, sync::LazyLock};

use anyhow::bail;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

use super::data::Summary;

pub const DEFAULT_TITLE: &str = "Untitled Blog Post";
pub const DEFAULT_DESCRIPTION: &str = "A blog post from Tre Coleman.";

/// How many lines after the title are considered for the description.
const DESCRIPTION_WINDOW: usize = 4;

// level-1 ATX heading, with an optional closing sequence
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[ \t]+(.*?)(?:[ \t]+#+)?$").expect("title pattern is valid")
});

/// Sniffs the title and description out of the leading lines.
///
/// The first line must be a `# ` heading for anything to be extracted; the
/// description is the first non-blank, non-heading line among the next four.
/// Whatever can't be found falls back to [`DEFAULT_TITLE`] and
/// [`DEFAULT_DESCRIPTION`].
pub fn summarize(markdown: &str) -> Summary {
    let mut summary = Summary {
        title: DEFAULT_TITLE.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
    };

    let mut lines = markdown.split('\n');
    let Some(caps) = lines
        .next()
        .and_then(|first| TITLE_PATTERN.captures(first.trim()))
    else {
        return summary;
    };
    let title = caps[1].trim();
    if title.is_empty() {
        return summary;
    }
    summary.title = title.to_string();

    if let Some(description) = lines
        .take(DESCRIPTION_WINDOW)
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
    {
        summary.description = description.to_string();
    }

    summary
}

/// `Hello World.md` -> `hello-world.html`
pub fn output_file_name(source: &Path) -> anyhow::Result<String> {
    let Some(name) = source.file_name() else {
        bail!("{source:?} has no file name");
    };
    let name = name.to_string_lossy();
    let stem = name.strip_suffix(".md").unwrap_or(&name);

    Ok(format!("{stem}.html").replace(' ', "-").to_lowercase())
}

/// Raw HTML in the source is passed through untouched.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut body_html = String::new();
    html::push_html(&mut body_html, parser);
    body_html
}
