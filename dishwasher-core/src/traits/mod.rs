//! Hardware capability traits
//!
//! These traits define the interface between the wash cycle logic
//! and the appliance hardware. The controller depends only on these
//! abstractions; implementations are injected at construction.

pub mod door;
pub mod engine;
pub mod filter;
pub mod pump;

pub use door::DoorSensor;
pub use engine::{Engine, EngineFault};
pub use filter::DirtFilterSensor;
pub use pump::{PumpFault, WaterPump};
