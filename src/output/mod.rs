//! Everything that touches disk on the way out: writes and conversion.

pub mod convert;
pub mod save;
