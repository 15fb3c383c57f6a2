use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::SpaceId, slot::TimeSlot, space::Space};

/// Read-only access to the static amenity catalog.
#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Space>>;
    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<Space>>;
    /// The fixed daily schedule every space shares.
    async fn time_slots(&self) -> AppResult<Vec<TimeSlot>>;
}
