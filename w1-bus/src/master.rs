use crate::{BusMaster, PullupStatus};

/// Registration record for a bus-master transport.
///
/// Wraps a transport together with the optional operations it advertises to the bus framework.
/// The record forwards the mandatory bit operations unconditionally and forwards [BusMaster::set_pullup] only when advertised, answering [PullupStatus::Unsupported] otherwise, so the framework never has to know which transport it is talking to.
pub struct Master<M> {
    transport: M,
    supports_set_pullup: bool,
}

impl<M> Master<M> {
    /// Creates a registration record for `transport` with no optional operations advertised.
    pub fn new(transport: M) -> Self {
        Master {
            transport,
            supports_set_pullup: false,
        }
    }

    /// Advertise (or withhold) the strong pull-up operation.
    pub fn with_set_pullup(mut self, supported: bool) -> Self {
        self.supports_set_pullup = supported;
        self
    }

    /// Whether this registration advertises the strong pull-up operation.
    pub fn supports_set_pullup(&self) -> bool {
        self.supports_set_pullup
    }

    /// Shared access to the wrapped transport.
    pub fn transport(&self) -> &M {
        &self.transport
    }

    /// Exclusive access to the wrapped transport.
    pub fn transport_mut(&mut self) -> &mut M {
        &mut self.transport
    }

    /// Consumes the record and returns the wrapped transport.
    pub fn into_transport(self) -> M {
        self.transport
    }
}

impl<M: BusMaster> BusMaster for Master<M> {
    fn read_bit(&mut self) -> bool {
        self.transport.read_bit()
    }

    fn write_bit(&mut self, bit: bool) {
        self.transport.write_bit(bit)
    }

    fn set_pullup(&mut self, delay_ms: u32) -> PullupStatus {
        if self.supports_set_pullup {
            self.transport.set_pullup(delay_ms)
        } else {
            PullupStatus::Unsupported
        }
    }
}
