use w1_bus::RegistryError;

use crate::LineRole;

#[derive(Debug)]
/// GPIO bus-master attach errors.
pub enum W1GpioError<E> {
    /// No platform configuration was supplied for the device.
    NoConfiguration,
    /// A line the driver cannot run without is absent from the platform description.
    Missing(LineRole),
    /// Claiming a line from the platform failed.
    Request(LineRole, E),
    /// The bus framework rejected the registration.
    Registry(RegistryError),
}

impl<E> From<RegistryError> for W1GpioError<E> {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}
