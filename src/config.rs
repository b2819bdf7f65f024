//! Run configuration — defaults, an optional config file and CLI overrides.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/report-index/config.toml` (default
//! `~/.config/report-index/config.toml`). Command-line flags win over the
//! file, the file wins over the built-in defaults.

use std::path::{Path, PathBuf};

use crate::core::page::{DEFAULT_CSS_PATH, DEFAULT_TITLE};
use crate::core::render::{DEFAULT_HEADER_LEVEL, MAX_HEADER_LEVEL};
use crate::core::syntax::TraversalOrder;
use crate::output::convert::DEFAULT_CONVERTER_CMD;

// ───────────────────────────────────────── converter ─────────

/// Which Markdown → HTML converter the Markdown mode uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConverterKind {
    /// In-process conversion.
    Builtin,
    /// External program from `converter_cmd`.
    Command,
}

impl ConverterKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "builtin" => Some(Self::Builtin),
            "command" => Some(Self::Command),
            _ => None,
        }
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Stylesheet linked from the page shell.
    pub css_path: String,
    /// `<title>` of the page shell.
    pub title: String,
    /// Header level of the root directory.
    pub header_level: usize,
    /// Force a traversal order instead of the mode's own.
    pub order: Option<TraversalOrder>,
    /// Sort entries by name for reproducible output.
    pub sort_entries: bool,
    pub converter: ConverterKind,
    pub converter_cmd: String,
    /// Leave the intermediate Markdown file on disk.
    pub keep_markdown: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            css_path: DEFAULT_CSS_PATH.to_string(),
            title: DEFAULT_TITLE.to_string(),
            header_level: DEFAULT_HEADER_LEVEL,
            order: None,
            sort_entries: false,
            converter: ConverterKind::Builtin,
            converter_cmd: DEFAULT_CONVERTER_CMD.to_string(),
            keep_markdown: false,
        }
    }
}

impl IndexConfig {
    /// Load the user config file, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path; a missing or unreadable file gives defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Parse `key = value` lines over the defaults. Comments, section
    /// headers and unknown keys are ignored; bad values keep the default.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "css_path" => config.css_path = value.to_string(),
                "title" => config.title = value.to_string(),
                "header_level" => {
                    match value.parse::<usize>() {
                        Ok(v) if (1..=MAX_HEADER_LEVEL).contains(&v) => config.header_level = v,
                        _ => tracing::warn!(value, "ignoring out-of-range header_level"),
                    }
                }
                "order" => {
                    if let Some(order) = TraversalOrder::parse(value) {
                        config.order = Some(order);
                    }
                }
                "sort_entries" => config.sort_entries = value == "true",
                "converter" => {
                    if let Some(kind) = ConverterKind::parse(value) {
                        config.converter = kind;
                    }
                }
                "converter_cmd" => config.converter_cmd = value.to_string(),
                "keep_markdown" => config.keep_markdown = value == "true",
                other => tracing::warn!(key = other, "unknown config key"),
            }
        }

        config
    }
}

/// Resolve an on/off setting from a `--flag` / `--no-flag` pair; either one
/// overrides `current`, neither keeps it.
pub fn resolve_switch(current: bool, on: bool, off: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => current,
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/report-index/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("report-index").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(IndexConfig::parse(""), IndexConfig::default());
    }

    #[test]
    fn known_keys() {
        let cfg = IndexConfig::parse(
            "# report-index\n\
             [index]\n\
             css_path = \"assets/site.css\"\n\
             title = Nightly Reports\n\
             header_level = 1\n\
             order = interleaved\n\
             sort_entries = true\n\
             converter = command\n\
             converter_cmd = pandoc {input} -o {output}\n\
             keep_markdown = true\n\
             colour = blue\n",
        );
        assert_eq!(cfg.css_path, "assets/site.css");
        assert_eq!(cfg.title, "Nightly Reports");
        assert_eq!(cfg.header_level, 1);
        assert_eq!(cfg.order, Some(TraversalOrder::Interleaved));
        assert!(cfg.sort_entries);
        assert_eq!(cfg.converter, ConverterKind::Command);
        assert_eq!(cfg.converter_cmd, "pandoc {input} -o {output}");
        assert!(cfg.keep_markdown);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let cfg = IndexConfig::parse("header_level = 0\nconverter = magic\norder = random\n");
        assert_eq!(cfg.header_level, DEFAULT_HEADER_LEVEL);
        assert_eq!(cfg.converter, ConverterKind::Builtin);
        assert_eq!(cfg.order, None);
    }

    #[test]
    fn oversized_header_level_is_ignored() {
        let cfg = IndexConfig::parse("header_level = 18446744073709551615\n");
        assert_eq!(cfg.header_level, DEFAULT_HEADER_LEVEL);
        let cfg = IndexConfig::parse("header_level = 65536\n");
        assert_eq!(cfg.header_level, DEFAULT_HEADER_LEVEL);
        let cfg = IndexConfig::parse("header_level = 65535\n");
        assert_eq!(cfg.header_level, MAX_HEADER_LEVEL);
    }

    #[test]
    fn switches() {
        assert!(resolve_switch(false, true, false));
        assert!(!resolve_switch(true, false, true));
        assert!(resolve_switch(true, false, false));
        assert!(!resolve_switch(false, false, false));
    }

    #[test]
    fn missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = IndexConfig::load_from(&tmp.path().join("config.toml"));
        assert_eq!(cfg, IndexConfig::default());
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "title = Weekly\n").unwrap();
        assert_eq!(IndexConfig::load_from(&path).title, "Weekly");
    }
}
