//! Events that trigger cycle transitions

use crate::result::CycleError;

/// Events that can trigger cycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleEvent {
    /// Start requested
    Start,

    // Interlock events
    /// Door sensor reported closed
    DoorClosed,
    /// Door sensor reported open
    DoorOpen,
    /// Filter reading accepted
    FilterOk,
    /// Filter reading rejected (clogged or invalid)
    FilterRejected,

    // Actuation events
    /// Engine finished the program
    ProgramFinished,
    /// Engine reported a fault
    EngineFaulted,
    /// Pump drained the chamber
    Drained,
    /// Pump reported a fault
    PumpFaulted,
}

impl CycleEvent {
    /// Failure event reported for a cycle error
    pub fn failure(error: &CycleError) -> Self {
        match error {
            CycleError::DoorOpen => CycleEvent::DoorOpen,
            CycleError::Filter(_) => CycleEvent::FilterRejected,
            CycleError::Program(_) => CycleEvent::EngineFaulted,
            CycleError::Pump(_) => CycleEvent::PumpFaulted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_for_error() {
        use crate::traits::{EngineFault, PumpFault};

        assert_eq!(
            CycleEvent::failure(&CycleError::DoorOpen),
            CycleEvent::DoorOpen
        );
        assert_eq!(
            CycleEvent::failure(&CycleError::Program(EngineFault::Stalled)),
            CycleEvent::EngineFaulted
        );
        assert_eq!(
            CycleEvent::failure(&CycleError::Pump(PumpFault::Blocked)),
            CycleEvent::PumpFaulted
        );
    }
}
