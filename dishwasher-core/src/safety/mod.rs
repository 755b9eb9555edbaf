//! Safety interlock
//!
//! Evaluates the preconditions that must hold before any hardware is
//! actuated.

pub mod interlock;

pub use interlock::{Interlock, SafetyStatus};
