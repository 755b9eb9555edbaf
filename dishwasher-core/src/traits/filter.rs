//! Dirt filter sensor trait

/// Full filter capacity (percent)
pub const FULL_CAPACITY: f32 = 100.0;

/// Trait for the dirt filter sensor
///
/// Reports how much of the filter is still free to collect food
/// particles. 100.0 is a freshly cleaned filter, 0.0 is fully clogged.
pub trait DirtFilterSensor {
    /// Read the remaining filter capacity as a percentage (0.0 - 100.0)
    fn capacity(&mut self) -> f32;
}

impl<T: DirtFilterSensor + ?Sized> DirtFilterSensor for &mut T {
    fn capacity(&mut self) -> f32 {
        T::capacity(self)
    }
}
