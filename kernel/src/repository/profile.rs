use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::ProfileId,
    profile::{event::CreateProfile, Profile},
};

/// The resident directory. Entries are append-only: imports may produce
/// duplicates and nothing is ever removed.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All directory entries in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Profile>>;
    /// Resolves an acting identity: directory entries plus the
    /// well-known admin profile.
    async fn find_actor(&self, profile_id: &ProfileId) -> AppResult<Option<Profile>>;
    /// Appends imported roster entries, assigning fresh ids and the
    /// resident role. No de-duplication by email or unit is performed.
    async fn add_all(&self, events: Vec<CreateProfile>) -> AppResult<Vec<Profile>>;
}
