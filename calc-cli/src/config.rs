//! Loading of user settings from a TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use calc_core::Settings;
use tracing::debug;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "pocketcalc.toml";

/// Loads settings.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// read if present and defaults are used otherwise. Keys missing from the
/// file keep their default values.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                debug!("no {DEFAULT_CONFIG_FILE} found, using default settings");
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    parse_settings(&text)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Parses settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings> {
    let settings = toml::from_str(text)?;
    Ok(settings)
}
