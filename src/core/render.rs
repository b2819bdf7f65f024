//! Directory index renderer — walk a directory tree and emit nested headers
//! with links to every qualifying report file.
//!
//! Directories that hold no qualifying file anywhere below them leave no
//! trace in the output (no orphaned headers).

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::humanize::humanize;
use super::syntax::{Syntax, TraversalOrder};
use crate::error::{IndexError, Result};

/// Header level used for the root directory when nothing else is asked for.
pub const DEFAULT_HEADER_LEVEL: usize = 2;

/// Deepest header level accepted, matching the `--level` bound.
pub const MAX_HEADER_LEVEL: usize = u16::MAX as usize;

/// Knobs for a single render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub syntax: Syntax,
    pub order: TraversalOrder,
    /// Sort entries by file name instead of keeping the platform listing order.
    pub sort_entries: bool,
}

impl RenderOptions {
    /// Options reproducing the historical behavior of `syntax`.
    pub fn new(syntax: Syntax) -> Self {
        Self {
            syntax,
            order: syntax.default_order(),
            sort_entries: false,
        }
    }
}

/// Immediate child of a directory that the renderer cares about.
#[derive(Debug)]
enum Entry {
    File(PathBuf),
    Dir(PathBuf),
}

/// Render the index for `root`, with its header at `level`.
pub fn render_index(root: &Path, level: usize, options: &RenderOptions) -> Result<String> {
    render_dir(root, level, options)
}

/// Render one directory and, recursively, everything below it.
///
/// Returns an empty string when nothing under `dir` qualifies.
pub fn render_dir(dir: &Path, level: usize, options: &RenderOptions) -> Result<String> {
    check_level(level)?;
    if !dir.is_dir() {
        return Err(IndexError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let syntax = options.syntax;
    let child_level = level
        .checked_add(1)
        .ok_or(IndexError::InvalidLevel(level))?;
    let entries = list_entries(dir, options.sort_entries)?;

    let mut body = String::new();
    let mut items = String::new();

    match options.order {
        TraversalOrder::FilesFirst => {
            for entry in &entries {
                if let Entry::File(path) = entry {
                    push_item(&mut items, path, syntax);
                }
            }
            flush_list(&mut body, &mut items, syntax);

            for entry in &entries {
                if let Entry::Dir(path) = entry {
                    body.push_str(&render_dir(path, child_level, options)?);
                }
            }
        }
        TraversalOrder::Interleaved => {
            for entry in &entries {
                match entry {
                    Entry::File(path) => push_item(&mut items, path, syntax),
                    Entry::Dir(path) => {
                        let fragment = render_dir(path, child_level, options)?;
                        if !fragment.is_empty() {
                            // Items collected so far must be closed before the
                            // subdirectory header.
                            flush_list(&mut body, &mut items, syntax);
                            body.push_str(&fragment);
                        }
                    }
                }
            }
            flush_list(&mut body, &mut items, syntax);
        }
    }

    if body.is_empty() {
        tracing::debug!(dir = %dir.display(), "nothing to index");
        return Ok(body);
    }

    tracing::debug!(dir = %dir.display(), level, "rendered directory");
    let header = syntax.header(level, &humanize(&dir_label(dir)));
    Ok(format!("\n\n{header}\n\n{body}"))
}

/// List the immediate files and directories of `dir`.
///
/// Anything that is neither (broken links, sockets, ...) is skipped.
fn list_entries(dir: &Path, sort: bool) -> Result<Vec<Entry>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if sort {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| IndexError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.into_path();
        // `is_dir`/`is_file` follow symlinks, like the listing a user sees.
        if path.is_dir() {
            entries.push(Entry::Dir(path));
        } else if path.is_file() {
            entries.push(Entry::File(path));
        }
    }
    Ok(entries)
}

fn check_level(level: usize) -> Result<()> {
    if (1..=MAX_HEADER_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(IndexError::InvalidLevel(level))
    }
}

fn push_item(items: &mut String, path: &Path, syntax: Syntax) {
    if !syntax.qualifies(path) {
        return;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    items.push_str(&syntax.item(&path.display().to_string(), &humanize(&stem)));
}

fn flush_list(body: &mut String, items: &mut String, syntax: Syntax) {
    if items.is_empty() {
        return;
    }
    body.push_str(&syntax.list(items));
    items.clear();
}

/// Name shown in a directory's header: its last path component, or the whole
/// path when there is none (`.`, `/`). A trailing separator is ignored, so
/// `reports/` is labelled like `reports`.
fn dir_label(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
