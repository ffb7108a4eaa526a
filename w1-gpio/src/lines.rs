use embedded_hal::digital::{InputPin, OutputPin};

/// Role of a GPIO line in the bus wiring.
///
/// Platform descriptions list the lines by a fixed index, exposed
/// through [LineRole::index].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// The 1-Wire data line.
    Data = 0,
    /// Line that force-pulls the bus high for high-current operations.
    StrongPullup = 1,
    /// Line that drives the bus low when the data line is sample-only.
    Pulldown = 2,
}

impl LineRole {
    /// Fixed index of this role in the platform description.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Drive mode a line is claimed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// High-impedance input.
    Input,
    /// Push-pull output, initially low.
    OutputLow,
    /// Open-drain output, initially low.
    OpenDrainOutputLow,
}

/// Source of GPIO lines for a 1-Wire bus, as described by the platform.
///
/// The driver claims lines through this trait during attach. A line a
/// board simply does not wire up is reported as `Ok(None)`; an `Err`
/// means the claim itself failed and aborts the attach.
pub trait GpioLines {
    /// Pin handle produced by a successful claim.
    type Line: InputPin + OutputPin;
    /// Error type of a failed claim.
    type Error;

    /// Claims the line at `role`'s index, configured as `mode`.
    ///
    /// # Arguments
    /// * `role` - Which of the bus lines to claim.
    /// * `mode` - The drive mode to configure the line with.
    ///
    /// # Returns
    /// The claimed pin handle, or [None] when nothing is wired at that index.
    ///
    /// # Errors
    /// Returns the platform's acquisition error when the claim fails.
    fn request(
        &mut self,
        role: LineRole,
        mode: LineMode,
    ) -> Result<Option<Self::Line>, Self::Error>;
}

/// Platform configuration of a GPIO 1-Wire bus.
pub struct W1GpioConfig<G> {
    /// Provider of the bus lines.
    pub lines: G,
    /// The data line is already open drain by external circuitry, so the
    /// driver drives it push-pull as if it had full control of the level.
    pub external_open_drain: bool,
}

impl<G: GpioLines> W1GpioConfig<G> {
    /// Creates a configuration over the given line provider.
    pub fn new(lines: G) -> Self {
        W1GpioConfig {
            lines,
            external_open_drain: false,
        }
    }

    /// Declare the data line as externally open drain.
    pub fn with_external_open_drain(mut self, external_open_drain: bool) -> Self {
        self.external_open_drain = external_open_drain;
        self
    }
}
