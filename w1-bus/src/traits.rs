/// Outcome of a strong pull-up request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullupStatus {
    /// The master accepted the request and times the pull-up itself.
    Handled,
    /// The master cannot time the pull-up; the bus framework has to provide the recovery delay itself.
    Unsupported,
}

/// Trait for bit-level 1-Wire bus masters.
/// This trait defines the physical-layer operations the bus framework drives a master through: sampling the bus, driving a bit slot, and the optional strong pull-up used to power parasitic devices through high-current operations.
///
/// The framework serializes calls per bus, so implementations are free to assume at most one operation is in flight at a time.
pub trait BusMaster {
    /// Samples the bus and returns the instantaneous bit level.
    ///
    /// # Returns
    /// `true` when the bus reads high, `false` when it reads low.
    fn read_bit(&mut self) -> bool;

    /// Drives the bus to the given bit level.
    ///
    /// # Arguments
    /// * `bit` - The level to drive, `true` for high (or released, on an open-drain bus) and `false` for low.
    fn write_bit(&mut self, bit: bool);

    /// Schedules or applies a strong pull-up on the bus.
    ///
    /// A non-zero `delay_ms` arms a pull-up of that many milliseconds without touching the bus; the framework issues it ahead of the write that needs the extra current.
    /// A zero `delay_ms` applies the armed pull-up, blocking for its duration, and clears it. Applying with nothing armed is a no-op.
    ///
    /// # Arguments
    /// * `delay_ms` - Pull-up duration in milliseconds to arm, or zero to apply and clear the armed duration.
    ///
    /// # Returns
    /// [PullupStatus::Handled] when the master timed (or will time) the pull-up, [PullupStatus::Unsupported] when the request was ignored.
    /// Masters without strong pull-up support keep this default implementation.
    fn set_pullup(&mut self, _delay_ms: u32) -> PullupStatus {
        PullupStatus::Unsupported
    }
}
