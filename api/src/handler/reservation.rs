use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::ReservationId,
    reservation::event::{CancelReservation, CreateReservation},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::ActingProfile,
    model::reservation::{
        CreateReservationRequest, CreateReservationRequestWithProfileId, ReservationResponse,
        ReservationsResponse,
    },
};

pub async fn reserve_space(
    actor: ActingProfile,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    let event =
        CreateReservation::try_from(CreateReservationRequestWithProfileId::new(actor.id(), req))?;

    registry
        .reservation_repository()
        .create(event)
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
}

/// Cancellation is idempotent by design: unknown ids and records that
/// are already cancelled answer OK without touching the ledger.
pub async fn cancel_reservation(
    _actor: ActingProfile,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_repository()
        .cancel(CancelReservation::new(reservation_id))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_reservation_list(
    _actor: ActingProfile,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_my_reservation_list(
    actor: ActingProfile,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_profile_id(&actor.id())
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

pub async fn show_reservation(
    _actor: ActingProfile,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(Json(reservation.into())),
            None => Err(AppError::EntityNotFound(format!(
                "reservation ({reservation_id}) was not found"
            ))),
        })
}
