use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};
use w1_bus::{Master, MasterHandle, MasterRegistry};

use crate::{GpioLines, LineMode, LineRole, W1Gpio, W1GpioConfig, W1GpioError};

impl<P, D> W1Gpio<P, D>
where
    P: InputPin + OutputPin,
    D: DelayNs,
{
    /// Claims the bus lines described by `config`, applies the drive-mode
    /// policy and registers the resulting master with the bus framework.
    ///
    /// The data line is claimed open drain unless the configuration
    /// declares it externally open drain (plain output) or a pull-down
    /// line is present (input only, with the pull-down line doing the
    /// driving). With no pull-down line the data line is driven high
    /// once, releasing the bus. The strong pull-up operation is
    /// advertised when the data line is open drain or a dedicated
    /// strong pull-up line was claimed.
    ///
    /// # Arguments
    /// * `config` - The platform configuration, or [None] on a platform that carries none.
    /// * `delay` - Timer used to time strong pull-up pulses.
    /// * `bus` - The bus-master registry to register with.
    ///
    /// # Returns
    /// A [W1GpioDevice] holding the registration handle.
    ///
    /// # Errors
    /// Returns [W1GpioError::NoConfiguration] without a configuration,
    /// [W1GpioError::Missing] when the data line is not wired,
    /// [W1GpioError::Request] when a line claim fails, and
    /// [W1GpioError::Registry] when the registry has no free slot.
    pub fn attach<G, const N: usize>(
        config: Option<W1GpioConfig<G>>,
        delay: D,
        bus: &mut MasterRegistry<Self, N>,
    ) -> Result<W1GpioDevice, W1GpioError<G::Error>>
    where
        G: GpioLines<Line = P>,
    {
        let W1GpioConfig {
            mut lines,
            external_open_drain,
        } = config.ok_or(W1GpioError::NoConfiguration)?;

        let pulldown = lines
            .request(LineRole::Pulldown, LineMode::OutputLow)
            .map_err(|e| W1GpioError::Request(LineRole::Pulldown, e))?;

        // Open drain unless something else already makes the line open
        // drain, input only when the pull-down line does the driving.
        let data_mode = if pulldown.is_some() {
            LineMode::Input
        } else if external_open_drain {
            LineMode::OutputLow
        } else {
            LineMode::OpenDrainOutputLow
        };

        let data = lines
            .request(LineRole::Data, data_mode)
            .map_err(|e| W1GpioError::Request(LineRole::Data, e))?
            .ok_or(W1GpioError::Missing(LineRole::Data))?;

        let strong_pullup = lines
            .request(LineRole::StrongPullup, LineMode::OutputLow)
            .map_err(|e| W1GpioError::Request(LineRole::StrongPullup, e))?;

        let advertise_pullup =
            data_mode == LineMode::OpenDrainOutputLow || strong_pullup.is_some();

        let mut master = W1Gpio {
            data,
            strong_pullup,
            pulldown,
            pullup_duration_ms: 0,
            delay,
        };
        if master.pulldown.is_none() {
            // Release the bus.
            let _ = master.data.set_high();
        }

        let handle = bus.add_master(Master::new(master).with_set_pullup(advertise_pullup))?;
        Ok(W1GpioDevice { handle })
    }
}

/// An attached GPIO bus master, identified by its registration handle.
#[derive(Debug)]
pub struct W1GpioDevice {
    pub(crate) handle: MasterHandle,
}

impl W1GpioDevice {
    /// Handle of the underlying registration.
    pub fn handle(&self) -> MasterHandle {
        self.handle
    }

    /// Unregisters the master and surrenders its lines.
    ///
    /// The strong pull-up line is forced inactive before the master is
    /// removed, so no high-current drive outlives the registration.
    pub fn detach<P, D, const N: usize>(self, bus: &mut MasterRegistry<W1Gpio<P, D>, N>)
    where
        P: InputPin + OutputPin,
        D: DelayNs,
    {
        if let Some(master) = bus.get_mut(self.handle) {
            master.transport_mut().release_strong_pullup();
        }
        bus.remove_master(self.handle);
    }

    /// Prepares the device for a system sleep state. The transport keeps
    /// no state that needs saving.
    pub fn suspend(&mut self) {}

    /// Returns the device to service after a system sleep state.
    pub fn resume(&mut self) {}
}
