#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    #[default]
    Init,
    Pending,
    Dirty,
    Clean,
}

impl StateSyncStatus {
    /// Whether the compute has to run on the next `run_all_dirty` pass.
    pub fn needs_run(self) -> bool {
        matches!(self, Self::Init | Self::Dirty)
    }
}
