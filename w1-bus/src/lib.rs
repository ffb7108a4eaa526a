#![no_std]
#![deny(missing_docs)]
//! # w1-bus
//! A no-std registration layer between 1-Wire bus masters and the bus framework.
//!
//! This crate defines the bit-level contract a bus master exposes to the framework, the [BusMaster] trait: reading a bit from the bus, writing a bit to the bus, and optionally applying a strong pull-up for high-current device operations.
//! A transport is registered by wrapping it in a [Master] record, which captures which optional operations the transport advertises, and adding the record to a [MasterRegistry].
//! The registry hands out opaque [MasterHandle]s that the platform side keeps for later lookup and removal.
//!
//! Protocol timing, reset and presence detection, byte framing, CRC checks and device search all belong to the bus framework built on top of these operations and are not part of this crate.

mod error;
mod master;
mod registry;
mod traits;
pub use error::RegistryError;
pub use master::Master;
pub use registry::{MasterHandle, MasterRegistry};
pub use traits::{BusMaster, PullupStatus};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
