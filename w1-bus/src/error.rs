/// Bus-master registration error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Every registration slot in the registry is already occupied.
    NoSpace,
}
