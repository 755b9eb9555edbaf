//! Configuration types
//!
//! Washing program definitions, the per-cycle program configuration and
//! the controller settings.

pub mod configuration;
pub mod controller;
#[cfg(feature = "toml")]
pub mod loader;
pub mod program;

pub use configuration::{BuildError, ProgramConfiguration, ProgramConfigurationBuilder};
pub use controller::{
    ConfigError, ControllerConfig, FilterCondition, FilterPolicy, MIN_FILTER_CAPACITY,
};
#[cfg(feature = "toml")]
pub use loader::{parse_config, LoadError};
pub use program::{FillLevel, WashingProgram};
