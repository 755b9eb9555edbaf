//! Wash cycle outcome
//!
//! Every cycle ends in exactly one [`Status`]. Non-success outcomes carry
//! a typed [`CycleError`] inside the controller; callers of
//! [`crate::WashController::start`] receive the flattened [`RunResult`].

use core::fmt;

use crate::config::FilterCondition;
use crate::traits::{EngineFault, PumpFault};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Final status of a wash cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Status {
    /// Program ran and the chamber was drained
    Success,
    /// Door was open, nothing was actuated
    DoorOpen,
    /// Dirt filter rejected, nothing was actuated
    ErrorFilter,
    /// Engine failed while running the program
    ErrorProgram,
    /// Pump failed while draining
    ErrorPump,
}

impl Status {
    /// Check if this is the success status
    pub const fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }

    /// Stable uppercase label
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::DoorOpen => "DOOR_OPEN",
            Status::ErrorFilter => "ERROR_FILTER",
            Status::ErrorProgram => "ERROR_PROGRAM",
            Status::ErrorPump => "ERROR_PUMP",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a wash cycle did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// Door sensor reported the door open
    DoorOpen,
    /// Dirt filter reading was rejected
    Filter(FilterCondition),
    /// Engine reported a fault while running the program
    Program(EngineFault),
    /// Pump reported a fault while draining
    Pump(PumpFault),
}

impl CycleError {
    /// Status reported for this error
    pub const fn status(&self) -> Status {
        match self {
            CycleError::DoorOpen => Status::DoorOpen,
            CycleError::Filter(_) => Status::ErrorFilter,
            CycleError::Program(_) => Status::ErrorProgram,
            CycleError::Pump(_) => Status::ErrorPump,
        }
    }
}

impl From<EngineFault> for CycleError {
    fn from(fault: EngineFault) -> Self {
        CycleError::Program(fault)
    }
}

impl From<PumpFault> for CycleError {
    fn from(fault: PumpFault) -> Self {
        CycleError::Pump(fault)
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::DoorOpen => f.write_str("door open"),
            CycleError::Filter(FilterCondition::InvalidReading) => {
                f.write_str("dirt filter reading invalid")
            }
            CycleError::Filter(_) => f.write_str("dirt filter clogged"),
            CycleError::Program(fault) => write!(f, "program failed: {fault}"),
            CycleError::Pump(fault) => write!(f, "drain failed: {fault}"),
        }
    }
}

/// Errors that can occur when building a [`RunResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResultError {
    /// No status was set
    MissingStatus,
    /// Success status without run minutes
    MissingRunMinutes,
    /// Run minutes given for a non-success status
    UnexpectedRunMinutes,
}

/// Outcome of one wash cycle
///
/// `run_minutes` is present if and only if the status is
/// [`Status::Success`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunResult {
    status: Status,
    run_minutes: Option<u16>,
}

impl RunResult {
    /// Successful cycle that ran for the given minutes
    pub const fn success(run_minutes: u16) -> Self {
        Self {
            status: Status::Success,
            run_minutes: Some(run_minutes),
        }
    }

    /// Start building a result
    pub fn builder() -> RunResultBuilder {
        RunResultBuilder::default()
    }

    /// Final status
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Minutes the program ran, only for successful cycles
    pub const fn run_minutes(&self) -> Option<u16> {
        self.run_minutes
    }

    /// Check if the cycle succeeded
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<CycleError> for RunResult {
    fn from(error: CycleError) -> Self {
        Self {
            status: error.status(),
            run_minutes: None,
        }
    }
}

impl From<Result<u16, CycleError>> for RunResult {
    fn from(outcome: Result<u16, CycleError>) -> Self {
        match outcome {
            Ok(minutes) => RunResult::success(minutes),
            Err(error) => error.into(),
        }
    }
}

/// Builder for [`RunResult`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RunResultBuilder {
    status: Option<Status>,
    run_minutes: Option<u16>,
}

impl RunResultBuilder {
    /// Set the status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the run time in minutes
    pub fn with_run_minutes(mut self, run_minutes: u16) -> Self {
        self.run_minutes = Some(run_minutes);
        self
    }

    /// Build the result, checking the minutes/status pairing
    pub fn build(self) -> Result<RunResult, ResultError> {
        let status = self.status.ok_or(ResultError::MissingStatus)?;

        match (status.is_success(), self.run_minutes) {
            (true, None) => Err(ResultError::MissingRunMinutes),
            (false, Some(_)) => Err(ResultError::UnexpectedRunMinutes),
            (_, run_minutes) => Ok(RunResult {
                status,
                run_minutes,
            }),
        }
    }
}
