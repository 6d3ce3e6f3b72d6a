use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::info;
use serde::Deserialize;

/// Paths and labels shared by both stages. Loaded once and passed down.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub site_root: PathBuf,
    pub posts: Vec<PathBuf>,
    /// Relative to `site_root`. Doubles as the href prefix of listing entries.
    pub blog_dir: String,
    pub records_file: String,
    pub index_page: PathBuf,
    pub site_name: String,
    /// Handlebars file replacing the built-in post template.
    pub template: Option<PathBuf>,

    pub links: LinkConfig,
    pub listing: ListingConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LinkConfig {
    pub blog_href: String,
    pub blog_label: String,
    pub footer_heading: String,
    pub dropdown_label: String,
    pub insert_after_href: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ListingConfig {
    /// CSS selector of the block that gets regenerated.
    pub container: String,
    pub meta_label: String,
    pub read_more_label: String,
    pub excerpt_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("site"),
            posts: vec![],
            blog_dir: "blog".to_string(),
            records_file: "blog_posts_data.json".to_string(),
            index_page: PathBuf::from("blog.html"),
            site_name: "Tre Coleman".to_string(),
            template: None,
            links: LinkConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            blog_href: "blog.html".to_string(),
            blog_label: "Blog".to_string(),
            footer_heading: "Quick Links".to_string(),
            dropdown_label: "Insights".to_string(),
            insert_after_href: "login.html".to_string(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            container: "div.blog-grid".to_string(),
            meta_label: "Operations • 7 min read".to_string(),
            read_more_label: "Read more →".to_string(),
            excerpt_limit: 150,
        }
    }
}

impl SiteConfig {
    pub fn load(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let fd = File::open(config_path)?;
            let reader = BufReader::new(fd);
            serde_json::from_reader(reader)
                .with_context(|| format!("while reading config {config_path:?}"))
        } else {
            info!("Config file({config_path:?}) does not exist. using defaults...");
            Ok(Self::default())
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.site_root.join(&self.blog_dir)
    }

    pub fn records_path(&self) -> PathBuf {
        self.output_dir().join(&self.records_file)
    }

    pub fn index_path(&self) -> PathBuf {
        self.site_root.join(&self.index_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("site.json")).unwrap();

        assert_eq!(config.site_root, PathBuf::from("site"));
        assert_eq!(config.listing.excerpt_limit, 150);
        assert_eq!(
            config.records_path(),
            PathBuf::from("site/blog/blog_posts_data.json")
        );
        assert_eq!(config.index_path(), PathBuf::from("site/blog.html"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r#"{"site_root": "public", "posts": ["a.md", "b.md"], "links": {"blog_label": "Articles"}}"#,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.output_dir(), PathBuf::from("public/blog"));
        assert_eq!(config.posts, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
        assert_eq!(config.links.blog_label, "Articles");
        assert_eq!(config.links.blog_href, "blog.html");
        assert_eq!(config.listing.container, "div.blog-grid");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(SiteConfig::load(&path).is_err());
    }
}
