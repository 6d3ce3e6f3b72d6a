use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use chrono::Datelike;
use handlebars::Handlebars;
use log::{info, warn};

use crate::{
    config::SiteConfig,
    metadata::PostRecord,
    records::save_records,
    renderer::{generate_renderer, POST_TEMPLATE},
};

mod data;
mod utils;

pub use data::Summary;
pub use utils::{output_file_name, render_markdown, summarize, DEFAULT_DESCRIPTION, DEFAULT_TITLE};

use data::PostPageData;

/// Converts one Markdown post into a page under `out_dir`.
///
/// The aggregate records file is not touched here; see [`convert_posts`].
pub fn convert_post(
    source: &Path,
    out_dir: &Path,
    handlebars: &Handlebars,
    site_name: &str,
) -> anyhow::Result<PostRecord> {
    let content = std::fs::read_to_string(source)
        .with_context(|| format!("while reading {source:?}"))?;
    let Summary { title, description } = summarize(&content);

    let file_name = output_file_name(source)?;
    let output_path = out_dir.join(&file_name);

    let data = PostPageData {
        site_name,
        year: chrono::Local::now().year(),
        title: &title,
        description: &description,
        body: render_markdown(&content),
    };

    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&output_path)
        .with_context(|| format!("while opening {output_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    handlebars
        .render_to_write(POST_TEMPLATE, &data, &mut writer)
        .with_context(|| format!("while generating from {source:?}"))?;
    writer.flush()?;

    Ok(PostRecord {
        title,
        description,
        file_name,
        output_path,
    })
}

/// Converts every configured post in order, then writes the records file once.
pub fn convert_posts(config: &SiteConfig) -> anyhow::Result<Vec<PostRecord>> {
    let out_dir = config.output_dir();
    fs_extra::dir::create_all(&out_dir, false)
        .with_context(|| format!("while creating {out_dir:?}"))?;

    let handlebars = generate_renderer(config.template.as_deref())?;

    if config.posts.is_empty() {
        warn!("No posts configured. writing an empty records file...");
    }

    let mut records = Vec::with_capacity(config.posts.len());
    for source in config.posts.iter() {
        let record = convert_post(source, &out_dir, &handlebars, &config.site_name)?;
        info!("  - {} -> {:?}", record.title, record.output_path);
        records.push(record);
    }

    let records_path = config.records_path();
    save_records(&records_path, &records)?;
    info!(
        "Converted {} markdown files to HTML in {out_dir:?}",
        records.len()
    );

    Ok(records)
}
