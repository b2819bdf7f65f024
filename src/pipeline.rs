//! End-to-end runs for the two index modes.

use std::path::{Path, PathBuf};

use crate::config::{ConverterKind, IndexConfig};
use crate::core::page;
use crate::core::render::{render_index, RenderOptions};
use crate::core::syntax::Syntax;
use crate::error::Result;
use crate::output::convert::{CommandConverter, ComrakConverter, MarkdownConverter};
use crate::output::save::{check_extension, save, OutputKind};

fn render_options(syntax: Syntax, config: &IndexConfig) -> RenderOptions {
    let mut options = RenderOptions::new(syntax);
    if let Some(order) = config.order {
        options.order = order;
    }
    options.sort_entries = config.sort_entries;
    options
}

/// HTML mode: render, wrap in the page shell, write `output`.
pub fn run_html(input: &Path, output: &Path, config: &IndexConfig) -> Result<()> {
    check_extension(output, OutputKind::Html)?;
    let options = render_options(Syntax::Html, config);
    let body = render_index(input, config.header_level, &options)?;
    let document = page::wrap(&body, &config.css_path, &config.title);
    save(&document, output, OutputKind::Html)
}

/// Converter selected by `config`.
pub fn converter_for(config: &IndexConfig) -> Result<Box<dyn MarkdownConverter>> {
    let converter: Box<dyn MarkdownConverter> = match config.converter {
        ConverterKind::Builtin => Box::new(ComrakConverter {
            css_path: config.css_path.clone(),
            title: config.title.clone(),
        }),
        ConverterKind::Command => Box::new(CommandConverter::from_template(&config.converter_cmd)?),
    };
    Ok(converter)
}

/// Where the Markdown mode writes its transient Markdown file.
pub fn intermediate_path(output: &Path) -> PathBuf {
    output.with_extension(OutputKind::Markdown.extension())
}

/// Markdown mode: render Markdown next to `output`, convert it to HTML at
/// `output`, then remove the Markdown file.
pub fn run_markdown(
    input: &Path,
    output: &Path,
    config: &IndexConfig,
    converter: &dyn MarkdownConverter,
) -> Result<()> {
    check_extension(output, OutputKind::Html)?;
    let options = render_options(Syntax::Markdown, config);
    let body = render_index(input, config.header_level, &options)?;

    let md_path = intermediate_path(output);
    save(&body, &md_path, OutputKind::Markdown)?;
    converter.convert(&md_path, output)?;

    if config.keep_markdown {
        return Ok(());
    }
    if let Err(e) = std::fs::remove_file(&md_path) {
        tracing::warn!(path = %md_path.display(), error = %e, "could not remove intermediate markdown");
    }
    Ok(())
}
