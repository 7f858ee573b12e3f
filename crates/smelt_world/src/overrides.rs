use anyhow::{bail, Context, Result};
use smelt_core::SmeltingConstants;

const VALID_KEYS: &[&str] = &[
    "cu_to_stein",
    "fe_to_stein",
    "s_to_stein",
    "au_to_stein",
    "ag_to_stein",
    "feo_per_fe",
];

/// Parses a `key=value` override as typed on the command line.
pub fn parse_override(raw: &str) -> Result<(String, f64)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("override '{raw}' must have the form key=value");
    };
    let key = key.trim();
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("override '{key}': expected a number, got '{value}'"))?;
    Ok((key.to_string(), value))
}

/// Applies overrides in order, then re-validates the result.
pub fn apply_overrides(
    constants: &mut SmeltingConstants,
    overrides: &[(String, f64)],
) -> Result<()> {
    for (key, value) in overrides {
        let value = *value;
        match key.as_str() {
            "cu_to_stein" => constants.cu_to_stein = value,
            "fe_to_stein" => constants.fe_to_stein = value,
            "s_to_stein" => constants.s_to_stein = value,
            "au_to_stein" => constants.au_to_stein = value,
            "ag_to_stein" => constants.ag_to_stein = value,
            "feo_per_fe" => constants.feo_per_fe = value,
            _ => bail!(
                "unknown override key '{key}'. Valid keys: {}",
                VALID_KEYS.join(", ")
            ),
        }
        tracing::debug!(key = %key, value, "constant overridden");
    }
    constants
        .validate()
        .context("constants invalid after overrides")?;
    Ok(())
}
