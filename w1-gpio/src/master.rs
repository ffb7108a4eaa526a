use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin, PinState},
};
use w1_bus::{BusMaster, PullupStatus};

use crate::W1Gpio;

impl<P, D> BusMaster for W1Gpio<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    fn read_bit(&mut self) -> bool {
        // A failed read samples as low.
        self.data.is_high().unwrap_or(false)
    }

    fn write_bit(&mut self, bit: bool) {
        if let Some(pulldown) = self.pulldown.as_mut() {
            // The pull-down line sinks the bus, so it is driven inverted.
            let _ = pulldown.set_state(PinState::from(!bit));
        } else {
            let _ = self.data.set_state(PinState::from(bit));
        }
    }

    fn set_pullup(&mut self, delay_ms: u32) -> PullupStatus {
        if delay_ms != 0 {
            self.pullup_duration_ms = delay_ms;
        } else {
            if self.pullup_duration_ms != 0 {
                if let Some(pullup) = self.strong_pullup.as_mut() {
                    // Overrides the open-drain emulation and force-pulls
                    // the bus high for the armed duration.
                    let _ = pullup.set_high();
                    self.delay.delay_ms(self.pullup_duration_ms);
                    let _ = pullup.set_low();
                } else {
                    log::warn!("strong pull up requested, but not available");
                }
            }
            self.pullup_duration_ms = 0;
        }
        PullupStatus::Handled
    }
}

impl<P: OutputPin, D> W1Gpio<P, D> {
    /// Forces the strong pull-up line inactive, dropping any armed request.
    pub(crate) fn release_strong_pullup(&mut self) {
        self.pullup_duration_ms = 0;
        if let Some(pullup) = self.strong_pullup.as_mut() {
            let _ = pullup.set_low();
        }
    }
}
