#![no_std]
#![deny(missing_docs)]

/*! # w1-gpio
 *
 * A 1-Wire bus master that bit-bangs the bus over one to three GPIO
 * lines: the data line itself, an optional strong pull-up line for
 * powering parasitic devices, and an optional pull-down line for
 * boards where the data line can only be sampled, not driven.
 *
 * The transport implements [BusMaster] from the `w1-bus` crate; the
 * bus framework built on that crate supplies all protocol timing.
 */

pub use w1_bus::{BusMaster, Master, MasterHandle, MasterRegistry, PullupStatus, RegistryError};
mod device;
mod error;
mod lines;
mod master;

pub use device::W1GpioDevice;
pub use error::W1GpioError;
pub use lines::{GpioLines, LineMode, LineRole, W1GpioConfig};

/// Name this driver claims GPIO lines and registers devices under.
pub const DRIVER_NAME: &str = "w1-gpio";

/// Platform compatible strings this driver binds to.
pub const OF_COMPATIBLE: [&str; 1] = ["w1-gpio"];

/// A GPIO bit-banged 1-Wire bus master.
///
/// Holds the claimed GPIO lines (implementing the
/// [`InputPin`](embedded_hal::digital::InputPin) and
/// [`OutputPin`](embedded_hal::digital::OutputPin) traits) and a timer
/// object implementing the [`DelayNs`](embedded_hal::delay::DelayNs)
/// trait, used to time the strong pull-up pulse.
///
/// Instances are created by [W1Gpio::attach], which claims the lines
/// per the platform description, applies the drive-mode policy and
/// registers the transport with the bus framework.
pub struct W1Gpio<P, D> {
    pub(crate) data: P,
    pub(crate) strong_pullup: Option<P>,
    pub(crate) pulldown: Option<P>,
    pub(crate) pullup_duration_ms: u32,
    pub(crate) delay: D,
}
