use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;

pub(crate) const POST_TEMPLATE: &str = "post";

const BUILTIN_POST_TEMPLATE: &str = include_str!("../templates/post.hbs");

/// Registry holding the page skeleton every post is wrapped in.
/// `template_file` replaces the built-in skeleton when given.
pub(crate) fn generate_renderer(template_file: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    match template_file {
        Some(path) => handlebars
            .register_template_file(POST_TEMPLATE, path)
            .with_context(|| format!("{path:?}"))?,
        None => handlebars
            .register_template_string(POST_TEMPLATE, BUILTIN_POST_TEMPLATE)
            .context("post.hbs")?,
    }

    Ok(handlebars)
}
