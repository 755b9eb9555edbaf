//! Water pump trait

use core::fmt;

/// Errors reported by the drain pump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpFault {
    /// Drain path blocked, water level not dropping
    Blocked,
    /// Pump running without water
    DryRun,
    /// Pump motor or relay failure
    Hardware,
}

impl fmt::Display for PumpFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PumpFault::Blocked => "drain blocked",
            PumpFault::DryRun => "pump running dry",
            PumpFault::Hardware => "pump hardware failure",
        };
        f.write_str(text)
    }
}

/// Trait for the drain pump
pub trait WaterPump {
    /// Drain the wash chamber
    ///
    /// Blocks until the chamber is empty or the pump reports a fault.
    fn drain(&mut self) -> Result<(), PumpFault>;
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn drain(&mut self) -> Result<(), PumpFault> {
        T::drain(self)
    }
}
