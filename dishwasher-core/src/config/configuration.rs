//! Per-cycle program configuration

use super::program::{FillLevel, WashingProgram};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`ProgramConfiguration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuildError {
    /// No washing program was set
    MissingProgram,
    /// No fill level was set
    MissingFillLevel,
}

/// Configuration for a single wash cycle
///
/// Created by the caller for each cycle and passed to the controller by
/// value. Fill level and tablet usage are carried to the engine but do
/// not change the cycle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    program: WashingProgram,
    fill_level: FillLevel,
    tablets_used: bool,
}

impl ProgramConfiguration {
    /// Create a configuration with all fields given
    pub const fn new(program: WashingProgram, fill_level: FillLevel, tablets_used: bool) -> Self {
        Self {
            program,
            fill_level,
            tablets_used,
        }
    }

    /// Start building a configuration
    pub fn builder() -> ProgramConfigurationBuilder {
        ProgramConfigurationBuilder::default()
    }

    /// Selected washing program
    pub const fn program(&self) -> WashingProgram {
        self.program
    }

    /// Water fill level
    pub const fn fill_level(&self) -> FillLevel {
        self.fill_level
    }

    /// Whether detergent tablets were loaded
    pub const fn tablets_used(&self) -> bool {
        self.tablets_used
    }
}

/// Builder for [`ProgramConfiguration`]
///
/// Program and fill level are required; tablets default to unused.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramConfigurationBuilder {
    program: Option<WashingProgram>,
    fill_level: Option<FillLevel>,
    tablets_used: bool,
}

impl ProgramConfigurationBuilder {
    /// Set the washing program
    pub fn with_program(mut self, program: WashingProgram) -> Self {
        self.program = Some(program);
        self
    }

    /// Set the fill level
    pub fn with_fill_level(mut self, fill_level: FillLevel) -> Self {
        self.fill_level = Some(fill_level);
        self
    }

    /// Set whether detergent tablets were loaded
    pub fn with_tablets_used(mut self, tablets_used: bool) -> Self {
        self.tablets_used = tablets_used;
        self
    }

    /// Build the configuration, checking required fields
    pub fn build(self) -> Result<ProgramConfiguration, BuildError> {
        let program = self.program.ok_or(BuildError::MissingProgram)?;
        let fill_level = self.fill_level.ok_or(BuildError::MissingFillLevel)?;

        Ok(ProgramConfiguration::new(program, fill_level, self.tablets_used))
    }
}
