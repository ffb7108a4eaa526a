use crate::{Master, RegistryError, RegistryResult};

/// Opaque identifier of a registered bus master.
///
/// Handles stay unique over the lifetime of a [MasterRegistry]; a handle whose registration has been removed is never reissued for a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterHandle(u32);

struct Slot<M> {
    id: u32,
    master: Master<M>,
}

/// Fixed-capacity table of registered bus masters.
///
/// The registry owns up to `N` [Master] records and hands out a [MasterHandle] per registration.
/// The bus framework looks masters up through [MasterRegistry::get_mut] to drive their bit operations; the platform side removes them again when the underlying transport goes away.
pub struct MasterRegistry<M, const N: usize> {
    slots: [Option<Slot<M>>; N],
    next_id: u32,
}

impl<M, const N: usize> Default for MasterRegistry<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, const N: usize> MasterRegistry<M, N> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        MasterRegistry {
            slots: [const { None }; N],
            next_id: 0,
        }
    }

    /// Registers a bus master and returns the handle to address it by.
    ///
    /// # Errors
    /// Returns [RegistryError::NoSpace] when every slot is occupied.
    pub fn add_master(&mut self, master: Master<M>) -> RegistryResult<MasterHandle> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_none())
            .ok_or(RegistryError::NoSpace)?;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        *slot = Some(Slot { id, master });
        Ok(MasterHandle(id))
    }

    /// Removes a registration and returns its record, or [None] for a stale handle.
    pub fn remove_master(&mut self, handle: MasterHandle) -> Option<Master<M>> {
        self.slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|s| s.id == handle.0))
            .and_then(|slot| slot.take())
            .map(|slot| slot.master)
    }

    /// Looks up a registered master.
    pub fn get(&self, handle: MasterHandle) -> Option<&Master<M>> {
        self.slots
            .iter()
            .flatten()
            .find(|slot| slot.id == handle.0)
            .map(|slot| &slot.master)
    }

    /// Looks up a registered master for exclusive access.
    pub fn get_mut(&mut self, handle: MasterHandle) -> Option<&mut Master<M>> {
        self.slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.id == handle.0)
            .map(|slot| &mut slot.master)
    }

    /// Number of current registrations.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether the registry holds no registrations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
