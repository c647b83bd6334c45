//! CLI command implementations
//!
//! Each submodule implements a family of CLI commands. Commands write their
//! results to the supplied writer, one record per line.

pub mod draw;
pub mod shuffle;
