//! Core algorithms – directory traversal, label and markup generation.
//!
//! Nothing in this module writes to disk; it only reads the directory tree.

pub mod humanize;
pub mod page;
pub mod render;
pub mod syntax;
