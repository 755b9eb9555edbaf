//! Door sensor trait

/// Trait for the door position sensor
///
/// Implementations typically read a reed switch or a microswitch in the
/// door latch.
pub trait DoorSensor {
    /// Check if the door is closed
    ///
    /// Takes `&mut self` because reading the switch may require mutable
    /// access to the underlying pin.
    fn closed(&mut self) -> bool;
}

impl<T: DoorSensor + ?Sized> DoorSensor for &mut T {
    fn closed(&mut self) -> bool {
        T::closed(self)
    }
}
