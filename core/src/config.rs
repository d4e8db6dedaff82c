//! Configuration loading and validation.
//!
//! The page may embed a JSON document overriding any subset of
//! [`FolioConfig`]. A missing document means stock behavior.

use folio_types::FolioConfig;

use crate::error::{FolioError, Result};

/// Parse and validate an optional configuration document.
pub fn load_config(source: Option<&str>) -> Result<FolioConfig> {
    let config = match source.map(str::trim) {
        None | Some("") => {
            tracing::debug!("No page configuration found, using defaults");
            FolioConfig::default()
        }
        Some(json) => serde_json::from_str(json)?,
    };
    validate(&config)?;
    Ok(config)
}

/// Check the constraints the components rely on.
pub fn validate(config: &FolioConfig) -> Result<()> {
    check_ratio("nav.section_ratio", config.nav.section_ratio)?;
    check_ratio("reveal.ratio", config.reveal.ratio)?;

    if config.typer.roles.is_empty() {
        return Err(FolioError::InvalidConfig(
            "typer.roles must not be empty".to_string(),
        ));
    }
    if let Some(idx) = config.typer.roles.iter().position(|r| r.is_empty()) {
        return Err(FolioError::InvalidConfig(format!(
            "typer.roles[{idx}] is empty"
        )));
    }
    if config.contact.address.trim().is_empty() {
        return Err(FolioError::InvalidConfig(
            "contact.address must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn check_ratio(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(FolioError::InvalidConfig(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}
