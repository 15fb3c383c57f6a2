//! Snapshot persistence: the whole ledger and directory are saved and
//! loaded as one opaque `{ reservations, residents }` blob. There is no
//! schema versioning; the persisted shape is exactly the kernel types.

use std::fs;
use std::io;
use std::path::PathBuf;

use derive_new::new;
use kernel::model::{profile::Profile, reservation::Reservation};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default = "default_residents")]
    pub residents: Vec<Profile>,
}

fn default_residents() -> Vec<Profile> {
    vec![catalog::default_resident()]
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            reservations: Vec::new(),
            residents: default_residents(),
        }
    }
}

pub trait SnapshotStore: Send + Sync {
    /// `None` means a cold start: no snapshot has ever been written, or
    /// the stored one is unreadable and the seed applies instead.
    fn load(&self) -> AppResult<Option<StoreSnapshot>>;
    fn save(&self, snapshot: &StoreSnapshot) -> AppResult<()>;
}

/// JSON-file-backed snapshot store.
#[derive(new)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> AppResult<Option<StoreSnapshot>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "snapshot is unreadable, falling back to seed data"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &StoreSnapshot) -> AppResult<()> {
        let raw = serde_json::to_vec_pretty(snapshot)
            .map_err(AppError::SnapshotSerializationError)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory snapshot store for tests.
#[derive(Default)]
pub struct MemorySnapshotStore(Mutex<Option<StoreSnapshot>>);

impl MemorySnapshotStore {
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        Self(Mutex::new(Some(snapshot)))
    }

    pub fn current(&self) -> Option<StoreSnapshot> {
        self.0.lock().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> AppResult<Option<StoreSnapshot>> {
        Ok(self.0.lock().clone())
    }

    fn save(&self, snapshot: &StoreSnapshot) -> AppResult<()> {
        *self.0.lock() = Some(snapshot.clone());
        Ok(())
    }
}
