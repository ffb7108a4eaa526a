use w1_bus::{BusMaster, Master, MasterRegistry, PullupStatus, RegistryError};

// ---------------------------------------------------------------------------
// Mock masters
// ---------------------------------------------------------------------------

/// A scripted bit-level master that records every call made through it.
#[derive(Debug, Default)]
struct ScriptedMaster {
    /// Bit levels returned by successive `read_bit` calls, front first.
    reads: Vec<bool>,
    /// Bits written through `write_bit`, in order.
    writes: Vec<bool>,
    /// Durations passed to `set_pullup`, in order.
    pullups: Vec<u32>,
}

impl ScriptedMaster {
    fn reading(reads: &[bool]) -> Self {
        Self {
            reads: reads.to_vec(),
            ..Self::default()
        }
    }
}

impl BusMaster for ScriptedMaster {
    fn read_bit(&mut self) -> bool {
        self.reads.remove(0)
    }

    fn write_bit(&mut self, bit: bool) {
        self.writes.push(bit);
    }

    fn set_pullup(&mut self, delay_ms: u32) -> PullupStatus {
        self.pullups.push(delay_ms);
        PullupStatus::Handled
    }
}

/// A master that keeps the default `set_pullup` implementation.
struct BareMaster;

impl BusMaster for BareMaster {
    fn read_bit(&mut self) -> bool {
        false
    }

    fn write_bit(&mut self, _bit: bool) {}
}

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn make_registry<const N: usize>() -> MasterRegistry<ScriptedMaster, N> {
    MasterRegistry::new()
}

// ---------------------------------------------------------------------------
// BusMaster contract
// ---------------------------------------------------------------------------

#[test]
fn default_set_pullup_is_unsupported() {
    let mut master = BareMaster;
    assert_eq!(master.set_pullup(100), PullupStatus::Unsupported);
    assert_eq!(master.set_pullup(0), PullupStatus::Unsupported);
}

// ---------------------------------------------------------------------------
// Registration record
// ---------------------------------------------------------------------------

#[test]
fn record_forwards_bit_operations() {
    let mut master = Master::new(ScriptedMaster::reading(&[true, false]));

    assert!(master.read_bit());
    assert!(!master.read_bit());
    master.write_bit(true);
    master.write_bit(false);

    let transport = master.into_transport();
    assert_eq!(transport.writes, [true, false]);
}

#[test]
fn record_withholds_set_pullup_unless_advertised() {
    let mut master = Master::new(ScriptedMaster::default());

    assert!(!master.supports_set_pullup());
    assert_eq!(master.set_pullup(50), PullupStatus::Unsupported);
    // The transport was never consulted.
    assert!(master.into_transport().pullups.is_empty());
}

#[test]
fn record_forwards_set_pullup_when_advertised() {
    let mut master = Master::new(ScriptedMaster::default()).with_set_pullup(true);

    assert!(master.supports_set_pullup());
    assert_eq!(master.set_pullup(50), PullupStatus::Handled);
    assert_eq!(master.set_pullup(0), PullupStatus::Handled);
    assert_eq!(master.into_transport().pullups, [50, 0]);
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn add_master_hands_out_distinct_handles() {
    let mut registry = make_registry::<4>();

    let h1 = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();
    let h2 = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();

    assert_ne!(h1, h2);
    assert_eq!(registry.len(), 2);
    assert!(registry.get(h1).is_some());
    assert!(registry.get(h2).is_some());
}

#[test]
fn registered_master_is_driven_through_the_registry() {
    let mut registry = make_registry::<2>();
    let handle = registry
        .add_master(Master::new(ScriptedMaster::reading(&[true])).with_set_pullup(true))
        .unwrap();

    let master = registry.get_mut(handle).unwrap();
    assert!(master.read_bit());
    master.write_bit(false);
    assert_eq!(master.set_pullup(10), PullupStatus::Handled);

    let transport = registry.remove_master(handle).unwrap().into_transport();
    assert_eq!(transport.writes, [false]);
    assert_eq!(transport.pullups, [10]);
}

#[test]
fn remove_master_frees_the_slot() {
    let mut registry = make_registry::<1>();
    let handle = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();

    assert!(registry.remove_master(handle).is_some());
    assert!(registry.is_empty());

    // The freed slot can host a new registration.
    assert!(registry.add_master(Master::new(ScriptedMaster::default())).is_ok());
}

#[test]
fn stale_handles_resolve_to_nothing() {
    let mut registry = make_registry::<2>();
    let handle = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();

    registry.remove_master(handle);

    assert!(registry.get(handle).is_none());
    assert!(registry.get_mut(handle).is_none());
    assert!(registry.remove_master(handle).is_none());
}

#[test]
fn handles_are_not_reissued_after_removal() {
    let mut registry = make_registry::<1>();
    let old = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();
    registry.remove_master(old);

    let new = registry.add_master(Master::new(ScriptedMaster::default())).unwrap();

    assert_ne!(old, new);
    // The stale handle does not alias the new registration.
    assert!(registry.get(old).is_none());
    assert!(registry.get(new).is_some());
}

#[test]
fn full_registry_rejects_registration() {
    let mut registry = make_registry::<2>();
    registry.add_master(Master::new(ScriptedMaster::default())).unwrap();
    registry.add_master(Master::new(ScriptedMaster::default())).unwrap();

    let err = registry.add_master(Master::new(ScriptedMaster::default())).unwrap_err();
    assert_eq!(err, RegistryError::NoSpace);
    assert_eq!(registry.len(), 2);
}

#[test]
fn empty_registry_reports_empty() {
    let registry = make_registry::<4>();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}
