use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use kernel::model::{id::ProfileId, profile::Profile};
use registry::AppRegistry;
use shared::error::AppError;

/// Header carrying the simulated acting identity. The role toggle of
/// the UI maps to switching this header between the well-known resident
/// and admin ids; no authorization is enforced.
pub const PROFILE_ID_HEADER: &str = "x-profile-id";

/// The profile a request acts as. Defaults to the seeded resident when
/// the header is absent, mirroring who the application boots as.
pub struct ActingProfile(pub Profile);

impl ActingProfile {
    pub fn id(&self) -> ProfileId {
        self.0.id.clone()
    }

    pub fn profile(&self) -> &Profile {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for ActingProfile {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let profile_id = match parts.headers.get(PROFILE_ID_HEADER) {
            None => ProfileId::from("res-1"),
            Some(value) => {
                let raw = value.to_str().map_err(|_| {
                    AppError::UnprocessableEntity(format!(
                        "{PROFILE_ID_HEADER} must be valid ASCII"
                    ))
                })?;
                ProfileId::from(raw)
            }
        };

        let profile = registry
            .profile_repository()
            .find_actor(&profile_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("profile ({profile_id}) was not found"))
            })?;

        Ok(Self(profile))
    }
}
