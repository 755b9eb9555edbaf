//! TOML loader for the controller configuration
//!
//! Supported layout:
//!
//! ```toml
//! [filter]
//! min_capacity = 5.0
//! ```
//!
//! Missing sections and keys fall back to their defaults. Unknown keys
//! are rejected so that typos do not silently keep the default.

use super::controller::{ConfigError, ControllerConfig};

/// Loader errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Input is not valid TOML or does not match the layout
    Parse,
    /// Parsed values failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Parse and validate a controller configuration
pub fn parse_config(input: &str) -> Result<ControllerConfig, LoadError> {
    let config: ControllerConfig = toml::from_str(input).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::warn!("Controller config parse error: {}", defmt::Debug2Format(&_e));
        LoadError::Parse
    })?;

    config.validate()?;

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Controller config loaded: filter min capacity {}%",
        config.filter.min_capacity
    );

    Ok(config)
}
