//! Wash controller
//!
//! Runs one wash cycle per [`WashController::start`] call:
//! - Checks the door and the dirt filter through the interlock
//! - Runs the selected program on the engine
//! - Drains the chamber with the pump
//! - Reports the outcome as a [`RunResult`]
//!
//! The controller only touches the hardware its current [`CycleState`]
//! calls for, so the engine and pump are never actuated after a failed
//! precondition.

use heapless::Vec;

use crate::config::{ConfigError, ControllerConfig, ProgramConfiguration};
use crate::result::{CycleError, RunResult};
use crate::safety::Interlock;
use crate::state::{CycleEvent, CycleState};
use crate::traits::{DirtFilterSensor, DoorSensor, Engine, WaterPump};

/// Maximum number of states visited in one cycle
pub const TRACE_CAPACITY: usize = CycleState::LONGEST_PATH;

/// Dishwasher cycle controller
///
/// Owns the four hardware capabilities for its whole lifetime. Cycles are
/// serialized by `&mut self`: a controller runs at most one cycle at a time.
pub struct WashController<D, F, E, P> {
    door: D,
    filter: F,
    engine: E,
    pump: P,
    interlock: Interlock,
    /// Current cycle state
    state: CycleState,
    /// States entered during the last cycle
    trace: Vec<CycleState, TRACE_CAPACITY>,
}

impl<D, F, E, P> WashController<D, F, E, P>
where
    D: DoorSensor,
    F: DirtFilterSensor,
    E: Engine,
    P: WaterPump,
{
    /// Create a controller with the default configuration
    pub fn new(door: D, filter: F, engine: E, pump: P) -> Self {
        Self::assemble(door, filter, engine, pump, Interlock::default())
    }

    /// Create a controller with a custom configuration
    ///
    /// The configuration is validated first, so a controller never runs
    /// with a filter threshold that could accept a clogged filter.
    pub fn with_config(
        door: D,
        filter: F,
        engine: E,
        pump: P,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(door, filter, engine, pump, Interlock::new(config.filter)))
    }

    fn assemble(door: D, filter: F, engine: E, pump: P, interlock: Interlock) -> Self {
        Self {
            door,
            filter,
            engine,
            pump,
            interlock,
            state: CycleState::Idle,
            trace: Vec::new(),
        }
    }

    /// Get access to the door sensor
    pub fn door(&self) -> &D {
        &self.door
    }

    /// Get access to the dirt filter sensor
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Get access to the engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get access to the pump
    pub fn pump(&self) -> &P {
        &self.pump
    }

    /// Release the hardware capabilities
    pub fn into_parts(self) -> (D, F, E, P) {
        (self.door, self.filter, self.engine, self.pump)
    }

    /// Get current cycle state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// States entered during the last cycle, in order
    pub fn trace(&self) -> &[CycleState] {
        &self.trace
    }

    /// Run one wash cycle and report the outcome
    ///
    /// Never fails: every hardware fault is reported through the status
    /// of the returned result.
    pub fn start(&mut self, config: ProgramConfiguration) -> RunResult {
        #[cfg(feature = "defmt")]
        defmt::info!("Starting {} cycle", config.program());

        let outcome = self.run_cycle(config);

        #[cfg(feature = "defmt")]
        match &outcome {
            Ok(minutes) => defmt::info!("{} cycle complete after {} min", config.program(), minutes),
            Err(error) => defmt::warn!("{} cycle aborted: {}", config.program(), error),
        }

        outcome.into()
    }

    /// Run one wash cycle, returning the run minutes or the typed fault
    pub fn run_cycle(&mut self, config: ProgramConfiguration) -> Result<u16, CycleError> {
        self.trace.clear();
        self.state = CycleState::Idle;
        self.advance(CycleEvent::Start);

        while let Some(outcome) = self.step(config) {
            match outcome {
                Ok(event) => self.advance(event),
                Err(error) => return Err(self.fail(error)),
            }
        }

        Ok(config.program().time_in_minutes())
    }

    /// Poll or actuate the hardware the current state calls for
    ///
    /// Returns `None` in states where no hardware may be touched.
    fn step(&mut self, config: ProgramConfiguration) -> Option<Result<CycleEvent, CycleError>> {
        let outcome = match self.state {
            CycleState::CheckingDoor => {
                let closed = self.door.closed();
                self.interlock
                    .check_door(closed)
                    .into_result()
                    .map(|()| CycleEvent::DoorClosed)
            }
            CycleState::CheckingFilter => {
                let capacity = self.filter.capacity();
                self.interlock
                    .check_filter(capacity)
                    .into_result()
                    .map(|()| CycleEvent::FilterOk)
            }
            state if state.engine_allowed() => self
                .engine
                .run_program(config)
                .map(|()| CycleEvent::ProgramFinished)
                .map_err(CycleError::from),
            state if state.pump_allowed() => self
                .pump
                .drain()
                .map(|()| CycleEvent::Drained)
                .map_err(CycleError::from),
            _ => return None,
        };
        Some(outcome)
    }

    /// End the cycle with the given error
    fn fail(&mut self, error: CycleError) -> CycleError {
        self.advance(CycleEvent::failure(&error));
        error
    }

    fn advance(&mut self, event: CycleEvent) {
        let next = self.state.transition(event);

        #[cfg(feature = "defmt")]
        defmt::trace!("Cycle {} --{}--> {}", self.state, event, next);

        self.state = next;
        if self.trace.push(next).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Cycle trace full, dropping {}", next);
        }
    }
}
