use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::profile::roster;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::ActingProfile,
    model::profile::{ImportRosterRequest, ResidentsResponse, RosterImportResponse},
};

pub async fn show_resident_list(
    _actor: ActingProfile,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResidentsResponse>> {
    registry
        .profile_repository()
        .find_all()
        .await
        .map(ResidentsResponse::from)
        .map(Json)
}

/// Roster import. Malformed lines are skipped, never fatal; the
/// response counts both outcomes so "0 imported" and "some skipped"
/// are distinguishable.
pub async fn import_residents(
    _actor: ActingProfile,
    State(registry): State<AppRegistry>,
    Json(req): Json<ImportRosterRequest>,
) -> AppResult<Json<RosterImportResponse>> {
    req.validate(&())?;

    let import = roster::parse_roster(&req.data);
    let skipped_count = import.skipped;

    let imported = registry.profile_repository().add_all(import.accepted).await?;

    Ok(Json(RosterImportResponse {
        imported_count: imported.len(),
        skipped_count,
        items: imported.into_iter().map(Into::into).collect(),
    }))
}
