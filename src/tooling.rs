//! Tooling & Integration Layer
//!
//! Command-line front-end over metadata loading, the file tree, and the formatters.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
