/// Sync status of a registered state or compute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSyncStatus {
    /// Registered but never synced.
    BeforeInit,
    /// Up to date.
    Clean,
    /// A dependency changed; the slot must recompute.
    Dirty,
    /// Recompute in progress this pass.
    Pending,
}
