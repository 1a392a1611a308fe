//! Command-line interface for the K-in-a-Row engine.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::KInARow;
