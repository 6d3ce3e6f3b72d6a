use std::path::PathBuf;

use anyhow::{bail, Context};
use blogpress::{patcher::update_site, SiteConfig};
use clap::{command, value_parser, Arg};
use log::warn;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = command!()
        .about("Rebuilds the blog index and adds blog links to every page")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Site configuration file. Defaults are used when it does not exist.")
                .value_parser(value_parser!(PathBuf))
                .default_value("site.json"),
        )
        .get_matches();

    let config_path: &PathBuf = matches.get_one("config").context("config path")?;
    let config = SiteConfig::load(config_path)?;
    if !config.site_root.is_dir() {
        bail!("site_root must be a directory.");
    }

    let report = update_site(&config)?;
    let skipped = report.skipped();
    if skipped > 0 {
        warn!("{skipped} page patches were skipped because the page structure did not match; please review them.");
    }

    Ok(())
}
