//! `report-index` — write an index page linking every report under a directory.
//!
//! `report-index html <dir> <out.html>` emits HTML directly.
//! `report-index markdown <dir> <out.html>` emits Markdown and converts it.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use report_index::config::{resolve_switch, ConverterKind, IndexConfig};
use report_index::core::syntax::TraversalOrder;
use report_index::pipeline;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Create an index page with links to reports in a directory")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,

    /// Header level of the root directory.
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    level: Option<u16>,

    /// Emit files and subdirectories in this order (defaults to the mode's own).
    #[arg(long, global = true, value_enum)]
    order: Option<TraversalOrder>,

    /// Sort entries by name instead of keeping the directory listing order.
    #[arg(long, global = true, overrides_with = "no_sort")]
    sort: bool,

    /// Keep the directory listing order even if the config file asks to sort.
    #[arg(long, global = true, overrides_with = "sort")]
    no_sort: bool,

    /// Read settings from this file instead of the user config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Write an HTML page listing `.html` files.
    Html {
        /// Path to directory to process.
        input_dir_path: PathBuf,
        /// Path to resulting html.
        output_path: PathBuf,
        /// Stylesheet linked from the page.
        #[arg(long)]
        css: Option<String>,
        /// Page title.
        #[arg(long)]
        title: Option<String>,
    },
    /// Write a Markdown index of `.html` and `.md` files and convert it to HTML.
    Markdown {
        /// Path to directory to process.
        input_dir_path: PathBuf,
        /// Path to resulting html.
        output_path: PathBuf,
        /// Markdown → HTML converter.
        #[arg(long, value_enum)]
        converter: Option<ConverterKind>,
        /// External converter command; `{input}` and `{output}` are substituted.
        #[arg(long)]
        converter_cmd: Option<String>,
        /// Keep the intermediate Markdown file.
        #[arg(long, overrides_with = "no_keep_markdown")]
        keep_markdown: bool,
        /// Remove the intermediate Markdown file even if the config keeps it.
        #[arg(long, overrides_with = "keep_markdown")]
        no_keep_markdown: bool,
    },
}

// ───────────────────────────────────────── main ─────────────

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => IndexConfig::load_from(path),
        None => IndexConfig::load(),
    };
    if let Some(level) = cli.level {
        config.header_level = usize::from(level);
    }
    if cli.order.is_some() {
        config.order = cli.order;
    }
    config.sort_entries = resolve_switch(config.sort_entries, cli.sort, cli.no_sort);

    match cli.mode {
        Mode::Html {
            input_dir_path,
            output_path,
            css,
            title,
        } => {
            if let Some(css) = css {
                config.css_path = css;
            }
            if let Some(title) = title {
                config.title = title;
            }
            pipeline::run_html(&input_dir_path, &output_path, &config).with_context(|| {
                format!("failed to index `{}`", input_dir_path.display())
            })?;
        }
        Mode::Markdown {
            input_dir_path,
            output_path,
            converter,
            converter_cmd,
            keep_markdown,
            no_keep_markdown,
        } => {
            if let Some(kind) = converter {
                config.converter = kind;
            }
            if let Some(cmd) = converter_cmd {
                config.converter_cmd = cmd;
            }
            config.keep_markdown =
                resolve_switch(config.keep_markdown, keep_markdown, no_keep_markdown);

            let converter = pipeline::converter_for(&config)?;
            pipeline::run_markdown(&input_dir_path, &output_path, &config, converter.as_ref())
                .with_context(|| format!("failed to index `{}`", input_dir_path.display()))?;
        }
    }

    Ok(())
}
