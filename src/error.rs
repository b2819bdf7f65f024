//! Error type shared by the renderer, the writers and the converters.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("`{}` does not exist or is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to list `{}`: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("output path `{}` must have a `.{expected}` extension", path.display())]
    BadExtension { path: PathBuf, expected: &'static str },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start converter `{program}`: {source}")]
    ConverterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("converter `{program}` exited with {status}")]
    ConverterFailed { program: String, status: ExitStatus },

    #[error("converter command template is empty")]
    EmptyConverterCommand,

    #[error("header level must be between 1 and 65535 (got {0})")]
    InvalidLevel(usize),
}

pub type Result<T> = std::result::Result<T, IndexError>;
