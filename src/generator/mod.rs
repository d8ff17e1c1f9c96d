//! # Generator Module
//!
//! The pure core of wheelwright: turns an in-memory [`Description`] into a
//! C++ header targeting a binarywheel-style serialization runtime.
//!
//! ## Pipeline
//!
//! ```text
//! Description → Validation/Lowering → Template Rendering → Header Assembly
//! ```
//!
//! 1. **Validation** — names, duplicates, the type language, reference
//!    resolution, constant/default literals. First failure wins; the error
//!    carries the declaration's position.
//! 2. **Lowering** — declarations become Askama template data with all types
//!    and values already in C++ spelling.
//! 3. **Rendering** — one template per declaration kind
//!    (`templates/*.hpp.txt`), joined in description order.
//! 4. **Assembly** — preamble (`#pragma once`, includes), optional namespace
//!    block, and the `EnumCount` trailer that tells the runtime how many
//!    bits each enum packs into.
//!
//! The generator performs no I/O. Loading descriptions is the
//! [`description`](crate::description) module's job; writing output belongs
//! to the CLI.
//!
//! [`Description`]: crate::description::Description

mod cpp;
mod emit;
mod error;
mod options;
mod templates;

pub use cpp::*;
pub use emit::*;
pub use error::*;
pub use options::*;
pub use templates::*;
