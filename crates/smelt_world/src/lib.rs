//! Content and batch loading shared by the smelt binaries.

mod batch;
mod overrides;

use anyhow::{Context, Result};
use smelt_core::{Compound, SmeltingConstants};
use std::path::Path;

pub use batch::parse_batch;
pub use overrides::{apply_overrides, parse_override};

/// Loads and validates `constants.json` from `content_dir`.
pub fn load_constants(content_dir: &str) -> Result<SmeltingConstants> {
    let path = Path::new(content_dir).join("constants.json");
    let constants: SmeltingConstants = serde_json::from_str(
        &std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
    )
    .with_context(|| format!("parsing {}", path.display()))?;
    constants
        .validate()
        .with_context(|| format!("validating {}", path.display()))?;
    tracing::debug!(?constants, "loaded process constants");
    Ok(constants)
}

/// Loads a batch file of compound records.
///
/// Parse and validation failures keep their `SmeltError` reachable through
/// `anyhow::Error::downcast_ref`.
pub fn load_batch(path: &Path) -> Result<Vec<Compound>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading batch file: {}", path.display()))?;
    let compounds =
        parse_batch(&json).with_context(|| format!("loading batch file: {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        compounds = compounds.len(),
        "batch loaded"
    );
    Ok(compounds)
}
