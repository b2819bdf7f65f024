//! Markdown → HTML conversion.
//!
//! The Markdown index is handed to a converter that produces the final HTML
//! page. The built-in converter uses [`comrak`]; [`CommandConverter`] shells
//! out to an external tool such as pandoc.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::page;
use crate::error::{IndexError, Result};

/// Default template for [`CommandConverter`].
pub const DEFAULT_CONVERTER_CMD: &str =
    "pandoc {input} --from markdown --to html --standalone --output {output}";

/// Anything able to turn a Markdown file into an HTML file.
pub trait MarkdownConverter {
    fn convert(&self, md_path: &Path, html_path: &Path) -> Result<()>;
}

// ───────────────────────────────────────── built-in ──────────

/// In-process conversion; the rendered fragment is placed in the page shell.
#[derive(Debug, Clone)]
pub struct ComrakConverter {
    pub css_path: String,
    pub title: String,
}

impl Default for ComrakConverter {
    fn default() -> Self {
        Self {
            css_path: page::DEFAULT_CSS_PATH.to_string(),
            title: page::DEFAULT_TITLE.to_string(),
        }
    }
}

impl MarkdownConverter for ComrakConverter {
    fn convert(&self, md_path: &Path, html_path: &Path) -> Result<()> {
        let markdown = std::fs::read_to_string(md_path).map_err(|source| IndexError::Read {
            path: md_path.to_path_buf(),
            source,
        })?;
        let options = comrak::Options::default();
        let body = comrak::markdown_to_html(&markdown, &options);
        let document = page::wrap(&body, &self.css_path, &self.title);
        std::fs::write(html_path, document).map_err(|source| IndexError::Write {
            path: html_path.to_path_buf(),
            source,
        })?;
        tracing::debug!(from = %md_path.display(), to = %html_path.display(), "converted with comrak");
        Ok(())
    }
}

// ───────────────────────────────────────── external ──────────

/// Runs an external program. `{input}` and `{output}` in any argument are
/// replaced with the Markdown and HTML paths.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    /// Build from a whitespace-separated template (no shell quoting).
    pub fn from_template(template: &str) -> Result<Self> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(IndexError::EmptyConverterCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    fn expand_args(&self, md_path: &Path, html_path: &Path) -> Vec<String> {
        let input = md_path.display().to_string();
        let output = html_path.display().to_string();
        self.args
            .iter()
            .map(|a| a.replace("{input}", &input).replace("{output}", &output))
            .collect()
    }
}

impl MarkdownConverter for CommandConverter {
    fn convert(&self, md_path: &Path, html_path: &Path) -> Result<()> {
        let args = self.expand_args(md_path, html_path);
        tracing::debug!(program = %self.program, ?args, "running converter");

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| IndexError::ConverterSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(IndexError::ConverterFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}
