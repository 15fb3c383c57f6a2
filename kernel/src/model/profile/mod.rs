use serde::{Deserialize, Serialize};

use crate::model::{id::ProfileId, role::Role};

pub mod event;
pub mod roster;

/// A resident or admin identity. Never mutated after creation; the
/// Directory has no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub email: String,
    pub unit_number: String,
    pub role: Role,
}
