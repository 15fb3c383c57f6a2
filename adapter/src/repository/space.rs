use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::SpaceId, slot::TimeSlot, space::Space};
use kernel::repository::space::SpaceRepository;
use shared::error::AppResult;

use crate::catalog;

/// Serves the static catalog. Nothing is stored: spaces and slots are
/// fixed for the process lifetime.
#[derive(new)]
pub struct SpaceRepositoryImpl;

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Space>> {
        Ok(catalog::spaces())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<Space>> {
        Ok(catalog::find_space(space_id))
    }

    async fn time_slots(&self) -> AppResult<Vec<TimeSlot>> {
        Ok(catalog::time_slots())
    }
}
