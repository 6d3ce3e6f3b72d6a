use std::path::PathBuf;

use anyhow::{bail, Context};
use blogpress::{generator::convert_posts, SiteConfig};
use clap::{command, value_parser, Arg};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .about("Converts Markdown posts into blog pages")
        .args([
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Site configuration file. Defaults are used when it does not exist.")
                .value_parser(value_parser!(PathBuf))
                .default_value("site.json"),
            Arg::new("posts")
                .help("Markdown files to convert, in listing order. Replaces `posts` from the config.")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let config_path: &PathBuf = matches.get_one("config").context("config path")?;
    let mut config = SiteConfig::load(config_path)?;
    if let Some(posts) = matches.get_many::<PathBuf>("posts") {
        config.posts = posts.cloned().collect();
    }

    for post in config.posts.iter() {
        if !post.is_file() {
            bail!("{post:?} must be a file.");
        }
    }

    convert_posts(&config)?;

    Ok(())
}
