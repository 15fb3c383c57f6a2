use axum::{
    extract::{Path, Query, State},
    Json,
};
use garde::Validate;
use kernel::model::id::SpaceId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ActingProfile,
    model::space::{
        AvailabilityQuery, SlotAvailability, SpaceAvailabilityResponse, SpaceResponse,
        SpacesResponse, TimeSlotsResponse,
    },
};

pub async fn show_space_list(
    _actor: ActingProfile,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(SpacesResponse::from)
        .map(Json)
}

pub async fn show_space(
    _actor: ActingProfile,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(&space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound(format!(
                "space ({space_id}) was not found"
            ))),
        })
}

pub async fn show_slot_list(
    _actor: ActingProfile,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TimeSlotsResponse>> {
    registry
        .space_repository()
        .time_slots()
        .await
        .map(TimeSlotsResponse::from)
        .map(Json)
}

/// The per-slot taken flags the booking grid renders. Advisory only:
/// the booking engine re-checks the triple at creation time.
pub async fn show_space_availability(
    _actor: ActingProfile,
    Path(space_id): Path<SpaceId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceAvailabilityResponse>> {
    query.validate(&())?;

    let space = registry
        .space_repository()
        .find_by_id(&space_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("space ({space_id}) was not found")))?;

    let mut slots = Vec::new();
    for time in registry.space_repository().time_slots().await? {
        let taken = registry
            .reservation_repository()
            .is_slot_taken(&space.id, query.date, time)
            .await?;
        slots.push(SlotAvailability { time, taken });
    }

    Ok(Json(SpaceAvailabilityResponse {
        space_id: space.id,
        date: query.date,
        slots,
    }))
}
