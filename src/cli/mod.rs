//! # CLI Module
//!
//! Command-line interface for the wheelwright code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a C++ header from a description:
//!
//! ```bash
//! wheelwright-gen generate types.yaml --namespace geo --out types.hpp
//! ```
//!
//! Options:
//! - `<INPUT>` - Path to the description file (required, positional)
//! - `-n, --namespace <NS>` - Namespace to wrap the output in (default: none)
//! - `-o, --out <FILE>` - Output path (default: standard output)
//! - `--options <FILE>` - Emit options TOML (default: `wheelwright.toml`
//!   next to the input, when present)
//!
//! ### `lint`
//!
//! Check a description for style and consistency issues:
//!
//! ```bash
//! wheelwright-gen lint types.yaml --fail-on-error
//! ```
//!
//! ## Exit codes
//!
//! 0 on success; non-zero on any failure, with the error written to standard
//! error. Generation never leaves partial output behind: the header is fully
//! rendered in memory before the sink is touched.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
