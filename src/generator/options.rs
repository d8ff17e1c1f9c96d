//! Emit options for generated headers
//!
//! Lets a project tune the rendered preamble via a TOML file that sits
//! alongside the description, without threading flags through every call.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name probed next to the description when `--options` is not given
pub const OPTIONS_FILE_NAME: &str = "wheelwright.toml";

/// Options controlling the non-declaration parts of the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Header that provides the serialization runtime
    pub runtime_include: String,
    /// Namespace the runtime lives in; qualifies `Scaled` and `EnumCount`
    pub runtime_namespace: String,
    /// Emit `#pragma once` at the top of the header
    pub pragma_once: bool,
    /// Extra `#include <…>` lines after the runtime include
    pub includes: Vec<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            runtime_include: "binarywheel.hpp".to_string(),
            runtime_namespace: "bw".to_string(),
            pragma_once: true,
            includes: Vec::new(),
        }
    }
}

/// Load emit options from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_emit_options(path: &Path) -> anyhow::Result<EmitOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {path:?}"))?;
    let options: EmitOptions = toml::from_str(&content)
        .with_context(|| format!("Failed to parse options file {path:?}"))?;
    debug!("loaded emit options from {path:?}");
    Ok(options)
}

/// Look for a `wheelwright.toml` next to the description file
pub fn detect_options_file(description_path: &Path) -> Option<PathBuf> {
    let candidate = description_path.parent()?.join(OPTIONS_FILE_NAME);
    candidate.exists().then_some(candidate)
}

/// Resolve emit options for a generation run
///
/// An explicit `--options` path wins; otherwise a `wheelwright.toml` next to
/// the description is used when present; otherwise defaults.
pub fn resolve_emit_options(
    explicit: Option<&Path>,
    description_path: &Path,
) -> anyhow::Result<EmitOptions> {
    match explicit {
        Some(path) => load_emit_options(path),
        None => match detect_options_file(description_path) {
            Some(path) => load_emit_options(&path),
            None => Ok(EmitOptions::default()),
        },
    }
}
