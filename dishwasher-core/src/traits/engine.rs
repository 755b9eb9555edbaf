//! Wash engine trait

use core::fmt;

use crate::config::ProgramConfiguration;

/// Errors reported by the wash engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineFault {
    /// Circulation motor stalled
    Stalled,
    /// Heating element exceeded its safe temperature
    Overheated,
    /// Engine refused the requested program
    ProgramRejected,
    /// Engine stopped responding
    Unresponsive,
}

impl fmt::Display for EngineFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EngineFault::Stalled => "engine stalled",
            EngineFault::Overheated => "engine overheated",
            EngineFault::ProgramRejected => "program rejected by engine",
            EngineFault::Unresponsive => "engine unresponsive",
        };
        f.write_str(text)
    }
}

/// Trait for the wash engine (circulation motor, heater, detergent dosing)
///
/// The engine executes a complete washing program. The call blocks until
/// the program has finished or failed.
pub trait Engine {
    /// Run the given program to completion
    fn run_program(&mut self, config: ProgramConfiguration) -> Result<(), EngineFault>;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_program(&mut self, config: ProgramConfiguration) -> Result<(), EngineFault> {
        T::run_program(self, config)
    }
}
