//! State machine for a wash cycle
//!
//! The cycle is explicit, finite, and deterministic. Hardware may only
//! be actuated in the states that allow it.

pub mod events;
pub mod machine;

pub use events::CycleEvent;
pub use machine::CycleState;
