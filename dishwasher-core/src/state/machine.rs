//! Cycle state definition
//!
//! The controller picks the hardware it touches from the current state, so
//! the engine only runs in `Washing` and the pump only in `Draining`.

use super::events::CycleEvent;
use crate::result::Status;

/// Wash cycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// No cycle started yet
    #[default]
    Idle,
    /// Polling the door sensor
    CheckingDoor,
    /// Polling the dirt filter sensor
    CheckingFilter,
    /// Engine running the program
    Washing,
    /// Pump draining the chamber
    Draining,
    /// Cycle ended with the given status
    Finished(Status),
}

impl CycleState {
    /// Number of states entered by the longest cycle (a successful one)
    pub const LONGEST_PATH: usize = 5;

    /// Check if this state allows running the engine
    pub fn engine_allowed(&self) -> bool {
        matches!(self, CycleState::Washing)
    }

    /// Check if this state allows running the pump
    pub fn pump_allowed(&self) -> bool {
        matches!(self, CycleState::Draining)
    }

    /// Check if the cycle has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, CycleState::Finished(_))
    }

    /// Final status, once the cycle has ended
    pub fn status(&self) -> Option<Status> {
        match self {
            CycleState::Finished(status) => Some(*status),
            _ => None,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: CycleEvent) -> Self {
        use CycleEvent::*;
        use CycleState::*;

        match (self, event) {
            // A new cycle always starts from the door check
            (Idle, Start) | (Finished(_), Start) => CheckingDoor,

            (CheckingDoor, DoorClosed) => CheckingFilter,
            (CheckingDoor, DoorOpen) => Finished(Status::DoorOpen),

            (CheckingFilter, FilterOk) => Washing,
            (CheckingFilter, FilterRejected) => Finished(Status::ErrorFilter),

            (Washing, ProgramFinished) => Draining,
            (Washing, EngineFaulted) => Finished(Status::ErrorProgram),

            (Draining, Drained) => Finished(Status::Success),
            (Draining, PumpFaulted) => Finished(Status::ErrorPump),

            // Default: stay in current state
            _ => self,
        }
    }
}
