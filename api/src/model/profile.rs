use garde::Validate;
use kernel::model::{id::ProfileId, profile::Profile, role::Role};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Serialize, Deserialize, VariantNames)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Resident,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::Resident => Self::Resident,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::Resident => Self::Resident,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentsResponse {
    pub items: Vec<ProfileResponse>,
}

impl From<Vec<Profile>> for ResidentsResponse {
    fn from(value: Vec<Profile>) -> Self {
        Self {
            items: value.into_iter().map(ProfileResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: ProfileId,
    pub full_name: String,
    pub email: String,
    pub unit_number: String,
    pub role: RoleName,
}

impl From<Profile> for ProfileResponse {
    fn from(value: Profile) -> Self {
        let Profile {
            id,
            full_name,
            email,
            unit_number,
            role,
        } = value;
        Self {
            id,
            full_name,
            email,
            unit_number,
            role: RoleName::from(role),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImportRosterRequest {
    /// Free-form roster text: one record per line,
    /// `full_name, email, unit_number`, extra fields ignored.
    #[garde(length(min = 1))]
    pub data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterImportResponse {
    pub imported_count: usize,
    pub skipped_count: usize,
    pub items: Vec<ProfileResponse>,
}
