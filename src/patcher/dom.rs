use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use kuchikiki::{traits::*, ElementData, NodeDataRef, NodeRef};
use maud::Markup;
use walkdir::WalkDir;

pub(crate) fn parse_page(path: &Path) -> anyhow::Result<NodeRef> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("while reading {path:?}"))?;
    Ok(kuchikiki::parse_html().one(content))
}

pub(crate) fn write_page(path: &Path, document: &NodeRef) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("while opening {path:?}"))?;
    let mut writer = BufWriter::new(fd);
    document
        .serialize(&mut writer)
        .with_context(|| format!("while writing {path:?}"))?;
    writer.flush()?;
    Ok(())
}

/// Builds a detached node from `markup`. `tag` picks the generated element
/// out of the document html5ever wraps it in.
pub(crate) fn fragment(markup: Markup, tag: &str) -> anyhow::Result<NodeRef> {
    let document = kuchikiki::parse_html().one(markup.into_string());
    let element = document
        .select_first(tag)
        .map_err(|()| anyhow!("generated markup has no <{tag}>"))?;
    let node = element.as_node().clone();
    node.detach();
    Ok(node)
}

pub(crate) fn href(element: &NodeDataRef<ElementData>) -> Option<String> {
    element.attributes.borrow().get("href").map(str::to_string)
}

pub(crate) fn anchors(node: &NodeRef) -> impl Iterator<Item = NodeDataRef<ElementData>> {
    node.select("a").into_iter().flatten()
}

pub(crate) fn links_to(node: &NodeRef, target: &str) -> bool {
    anchors(node).any(|a| href(&a).as_deref() == Some(target))
}

pub(crate) fn has_text(element: &NodeDataRef<ElementData>, text: &str) -> bool {
    element.as_node().text_contents().trim() == text
}

pub(crate) fn is_tag(element: &NodeDataRef<ElementData>, tag: &str) -> bool {
    &*element.name.local == tag
}

/// Every `.html` file below `root`, in a stable order.
pub(crate) fn html_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("while walking {root:?}"))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "html")
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
