//! # wheelwright
//!
//! **wheelwright** is a schema-driven C++ code generator: it consumes a
//! description of wire types (an ordered sequence of struct, enum, function,
//! and constant declarations, written as YAML or JSON) and renders a
//! deterministic header targeting a binarywheel-style bit-packing
//! serialization runtime.
//!
//! ## Architecture
//!
//! The library is organized into a few modules:
//!
//! - **[`description`]** - the input data model and file loading
//! - **[`generator`]** - the pure generation core (validation, lowering,
//!   Askama template rendering, header assembly)
//! - **[`linter`]** - style and consistency diagnostics for descriptions
//! - **[`cli`]** - the `wheelwright-gen` command-line surface
//!
//! ## Code Generation Flow
//!
//! ```text
//! description.yaml → load_description → Description
//!                                           │
//!                                generate(&description, "geo")
//!                                           │
//!              validate → render templates → assemble header
//!                                           │
//!                                    String → file or stdout
//! ```
//!
//! The generator itself performs no I/O and holds no state: it is a pure
//! function from `(Description, namespace, EmitOptions)` to a `String`, and
//! identical input always produces byte-identical output. Loading
//! descriptions and writing headers are the caller's concerns; the CLI wires
//! the three together.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wheelwright::{generate, load_description};
//!
//! let description = load_description(Path::new("types.yaml"))?;
//! let header = generate(&description, "geo")?;
//! std::fs::write("types.hpp", header)?;
//! ```
//!
//! Generated structs expose their fields to the runtime through `operator~`
//! tuple ties, and generated enums carry an `EnumCount` specialization that
//! tells the runtime how many bits to pack them into.

pub mod cli;
pub mod description;
pub mod generator;
pub mod linter;

pub use description::{load_description, Declaration, Description};
pub use generator::{generate, generate_with_options, EmitOptions, GenerateError};
