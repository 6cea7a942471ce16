//! Snapshot persistence contract and key-value implementation.

use super::{read_document, write_document, RepoResult};
use crate::model::snapshot::Snapshot;
use crate::storage::KeyValueStore;

/// Storage key of the application snapshot.
pub const SNAPSHOT_KEY: &str = "taskboard.state";

/// Load/save capability for the whole application state.
pub trait SnapshotRepository {
    /// Returns the last saved snapshot, or `None` when nothing was saved.
    fn load_snapshot(&self) -> RepoResult<Option<Snapshot>>;
    /// Overwrites the stored snapshot.
    fn save_snapshot(&self, snapshot: &Snapshot) -> RepoResult<()>;
}

pub struct KvSnapshotRepository<S> {
    store: S,
}

impl<S: KeyValueStore> KvSnapshotRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> SnapshotRepository for KvSnapshotRepository<S> {
    fn load_snapshot(&self) -> RepoResult<Option<Snapshot>> {
        read_document(&self.store, SNAPSHOT_KEY)
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> RepoResult<()> {
        write_document(&self.store, SNAPSHOT_KEY, snapshot)
    }
}
