//! Extension-checked writes of rendered documents.

use std::path::Path;

use crate::error::{IndexError, Result};

/// Kind of document being written; decides the required extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Html,
    Markdown,
}

impl OutputKind {
    pub fn extension(self) -> &'static str {
        match self {
            OutputKind::Html => "html",
            OutputKind::Markdown => "md",
        }
    }
}

/// Fail unless `path` ends in the extension of `kind`.
pub fn check_extension(path: &Path, kind: OutputKind) -> Result<()> {
    let matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == kind.extension());
    if matches {
        Ok(())
    } else {
        Err(IndexError::BadExtension {
            path: path.to_path_buf(),
            expected: kind.extension(),
        })
    }
}

/// Write `content` to `path`, replacing any existing file.
pub fn save(content: &str, path: &Path, kind: OutputKind) -> Result<()> {
    check_extension(path, kind)?;
    std::fs::write(path, content).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("index.html");
        save("first", &path, OutputKind::Html).unwrap();
        save("second", &path, OutputKind::Html).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn wrong_extension_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("index.htm");
        let err = save("x", &path, OutputKind::Html).unwrap_err();
        assert!(matches!(err, IndexError::BadExtension { expected: "html", .. }));
        assert!(!path.exists());
    }

    #[test]
    fn markdown_requires_md() {
        assert!(check_extension(Path::new("out/index.md"), OutputKind::Markdown).is_ok());
        assert!(check_extension(Path::new("out/index.html"), OutputKind::Markdown).is_err());
        assert!(check_extension(Path::new("out/index"), OutputKind::Markdown).is_err());
        assert!(check_extension(Path::new("out/index.HTML"), OutputKind::Html).is_err());
    }
}
