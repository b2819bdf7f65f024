//! Output syntax strategies — how headers, list items and lists are spelled.
//!
//! The traversal in [`super::render`] is shared; everything that differs
//! between the HTML and the Markdown index lives here.

use std::path::Path;

// ───────────────────────────────────────── syntax ────────────

/// Markup emitted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `<hN>` headers and `<ul><li><a>` lists; indexes `.html` files.
    Html,
    /// `#`-style headers and `- [label](path)` items; indexes `.html` and `.md`.
    Markdown,
}

impl Syntax {
    /// Extensions (without the dot) a file must carry to be listed.
    pub fn qualifying_extensions(self) -> &'static [&'static str] {
        match self {
            Syntax::Html => &["html"],
            Syntax::Markdown => &["html", "md"],
        }
    }

    /// Does `path` carry one of the qualifying extensions? Comparison is exact.
    pub fn qualifies(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.qualifying_extensions().contains(&ext))
    }

    /// Traversal order this syntax has always used.
    pub fn default_order(self) -> TraversalOrder {
        match self {
            Syntax::Html => TraversalOrder::FilesFirst,
            Syntax::Markdown => TraversalOrder::Interleaved,
        }
    }

    /// Header line for a directory (no surrounding blank lines).
    pub fn header(self, level: usize, label: &str) -> String {
        match self {
            Syntax::Html => format!("<h{level}> {label}</h{level}>"),
            Syntax::Markdown => format!("{} {label}", "#".repeat(level)),
        }
    }

    /// One list entry linking to `href`, newline-terminated.
    pub fn item(self, href: &str, label: &str) -> String {
        match self {
            Syntax::Html => format!("<li><a href='{href}'>{label}</a></li>\n"),
            Syntax::Markdown => format!("- [{label}]({href})\n"),
        }
    }

    /// Close a run of consecutive items into a list block.
    pub fn list(self, items: &str) -> String {
        match self {
            Syntax::Html => format!("<ul>\n{items}</ul>\n\n"),
            Syntax::Markdown => format!("{items}\n"),
        }
    }
}

// ───────────────────────────────────────── order ─────────────

/// In which order a directory's files and subdirectories are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TraversalOrder {
    /// All qualifying files of a directory, then all of its subdirectories.
    FilesFirst,
    /// Entries in listing order, recursing into subdirectories where met.
    Interleaved,
}

impl TraversalOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "files-first" | "files_first" => Some(Self::FilesFirst),
            "interleaved" => Some(Self::Interleaved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_markup() {
        assert_eq!(Syntax::Html.header(3, "Sub"), "<h3> Sub</h3>");
        assert_eq!(
            Syntax::Html.item("r/a.html", "A"),
            "<li><a href='r/a.html'>A</a></li>\n"
        );
        assert_eq!(Syntax::Html.list("x\n"), "<ul>\nx\n</ul>\n\n");
    }

    #[test]
    fn markdown_markup() {
        assert_eq!(Syntax::Markdown.header(2, "Root"), "## Root");
        assert_eq!(Syntax::Markdown.item("r/b.md", "B"), "- [B](r/b.md)\n");
    }

    #[test]
    fn qualifying_sets() {
        assert!(Syntax::Html.qualifies(Path::new("a/report.html")));
        assert!(!Syntax::Html.qualifies(Path::new("a/report.md")));
        assert!(Syntax::Markdown.qualifies(Path::new("a/report.md")));
        assert!(Syntax::Markdown.qualifies(Path::new("a/report.html")));
        assert!(!Syntax::Html.qualifies(Path::new("a/REPORT.HTML")));
        assert!(!Syntax::Html.qualifies(Path::new("a/.html")));
        assert!(!Syntax::Markdown.qualifies(Path::new("a/notes")));
    }

    #[test]
    fn order_names() {
        assert_eq!(TraversalOrder::parse("files-first"), Some(TraversalOrder::FilesFirst));
        assert_eq!(TraversalOrder::parse("interleaved"), Some(TraversalOrder::Interleaved));
        assert_eq!(TraversalOrder::parse("sorted"), None);
    }
}
