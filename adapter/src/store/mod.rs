//! The application-owned state object: ledger and directory behind one
//! lock, with snapshot persistence attached. All mutation goes through
//! the repository implementations; nothing reaches the state ambiently.

use std::sync::Arc;

use kernel::model::{id::ProfileId, profile::Profile, reservation::Reservation};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use shared::error::AppResult;

use crate::catalog;

pub mod snapshot;

use snapshot::{SnapshotStore, StoreSnapshot};

/// Everything the persisted snapshot covers: the reservation ledger
/// (most recent first) and the resident directory (insertion order).
#[derive(Debug, Clone)]
pub struct StoreState {
    pub ledger: Vec<Reservation>,
    pub directory: Vec<Profile>,
}

impl StoreState {
    fn seeded() -> Self {
        Self {
            ledger: Vec::new(),
            directory: vec![catalog::default_resident()],
        }
    }

    /// Resolves an acting identity: directory entries plus the
    /// well-known admin, which is not part of the persisted directory.
    pub fn find_profile(&self, profile_id: &ProfileId) -> Option<Profile> {
        self.directory
            .iter()
            .find(|profile| profile.id == *profile_id)
            .cloned()
            .or_else(|| {
                let admin = catalog::default_admin();
                (admin.id == *profile_id).then_some(admin)
            })
    }
}

impl From<StoreSnapshot> for StoreState {
    fn from(value: StoreSnapshot) -> Self {
        let StoreSnapshot {
            reservations,
            residents,
        } = value;
        Self {
            ledger: reservations,
            directory: residents,
        }
    }
}

impl From<&StoreState> for StoreSnapshot {
    fn from(value: &StoreState) -> Self {
        Self {
            reservations: value.ledger.clone(),
            residents: value.directory.clone(),
        }
    }
}

struct StoreInner {
    state: RwLock<StoreState>,
    snapshot: Arc<dyn SnapshotStore>,
}

#[derive(Clone)]
pub struct SharedStore(Arc<StoreInner>);

impl SharedStore {
    /// Loads the persisted snapshot, or seeds a cold start with an
    /// empty ledger and the default resident.
    pub fn load(snapshot: Arc<dyn SnapshotStore>) -> AppResult<Self> {
        let state = match snapshot.load()? {
            Some(s) => StoreState::from(s),
            None => StoreState::seeded(),
        };
        Ok(Self(Arc::new(StoreInner {
            state: RwLock::new(state),
            snapshot,
        })))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.0.state.read()
    }

    /// A write guard is the critical section: check-and-insert style
    /// mutations must complete under a single guard.
    pub fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.0.state.write()
    }

    /// Fire-and-forget persistence after a mutation. The core never
    /// awaits or verifies completion; failures are logged and dropped.
    pub fn persist(&self, state: &StoreState) {
        if let Err(e) = self.0.snapshot.save(&StoreSnapshot::from(state)) {
            tracing::warn!(error = %e, "failed to persist store snapshot");
        }
    }
}
