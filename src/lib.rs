//! Build a navigable index page for a folder of generated reports.
//!
//! The directory tree is mirrored with nested headers and every qualifying
//! report becomes a link. Two modes share one traversal: HTML output, and
//! Markdown output converted to HTML.

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod pipeline;

pub use error::{IndexError, Result};
