//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    // An empty registry would leave the prompt with nothing to accept
    if !config.providers.stripe && !config.providers.adyen {
        bail!("providers: at least one payment provider must be enabled");
    }

    if !config.formats.csv && !config.formats.xml {
        bail!("formats: at least one file format must be enabled");
    }

    Ok(())
}
