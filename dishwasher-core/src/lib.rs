//! Board-agnostic control logic for the dishwasher
//!
//! This crate contains the wash cycle logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware capability traits (door, dirt filter, engine, water pump)
//! - Washing program and cycle configuration types
//! - Cycle state machine
//! - Safety interlock (door and filter preconditions)
//! - Wash controller producing the run result
//!
//! # Cycle
//!
//! ```text
//! INIT ─ door closed? ─ no ──▶ DOOR_OPEN
//!          │ yes
//!          ▼
//!        filter ok? ─── no ──▶ ERROR_FILTER
//!          │ yes
//!          ▼
//!        engine ok? ─── no ──▶ ERROR_PROGRAM
//!          │ yes
//!          ▼
//!        pump ok? ───── no ──▶ ERROR_PUMP
//!          │ yes
//!          ▼
//!        SUCCESS (run minutes = program duration)
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod result;
pub mod safety;
pub mod state;
pub mod traits;

pub use config::{ControllerConfig, FillLevel, FilterPolicy, ProgramConfiguration, WashingProgram};
pub use controller::WashController;
pub use result::{CycleError, RunResult, Status};
