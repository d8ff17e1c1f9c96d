use super::Description;
use anyhow::Context;
use std::path::Path;
use tracing::debug;

/// Load a description file into memory
///
/// Parses by extension: `.yaml`/`.yml` via serde_yaml, anything else as JSON.
/// The generator core never reads files itself; this is the only place a
/// description enters the process.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it does not parse as a
/// description (unknown `kind` tags and missing required keys surface here).
pub fn load_description(path: &Path) -> anyhow::Result<Description> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read description file {path:?}"))?;

    let description: Description = if path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
    {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML description {path:?}"))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON description {path:?}"))?
    };

    debug!(
        declarations = description.declarations.len(),
        "loaded description from {path:?}"
    );
    Ok(description)
}
