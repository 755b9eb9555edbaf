//! Door and filter interlock
//!
//! The interlock never reads sensors itself. The controller polls the
//! sensors in cycle order and hands the readings in, so a failed door
//! check means the filter sensor is never touched.

use crate::config::{FilterCondition, FilterPolicy};
use crate::result::CycleError;

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Precondition holds
    Ok,
    /// Precondition violated
    Fault(CycleError),
}

impl SafetyStatus {
    /// Convert into a `Result` for `?` propagation
    pub fn into_result(self) -> Result<(), CycleError> {
        match self {
            SafetyStatus::Ok => Ok(()),
            SafetyStatus::Fault(error) => Err(error),
        }
    }
}

/// Precondition checks gating hardware actuation
#[derive(Debug, Clone, Copy, Default)]
pub struct Interlock {
    filter: FilterPolicy,
}

impl Interlock {
    /// Create an interlock with the given filter policy
    pub const fn new(filter: FilterPolicy) -> Self {
        Self { filter }
    }

    /// Check the door sensor reading
    pub fn check_door(&self, closed: bool) -> SafetyStatus {
        if closed {
            SafetyStatus::Ok
        } else {
            SafetyStatus::Fault(CycleError::DoorOpen)
        }
    }

    /// Check the dirt filter capacity reading
    pub fn check_filter(&self, capacity: f32) -> SafetyStatus {
        match self.filter.evaluate(capacity) {
            FilterCondition::Ok => SafetyStatus::Ok,
            condition => SafetyStatus::Fault(CycleError::Filter(condition)),
        }
    }
}
