use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    id::{ProfileId, ReservationId, SpaceId},
    slot::TimeSlot,
};

pub mod event;

/// A booking record in the ledger. Records are never deleted, only
/// marked cancelled. `user_name` and `space_name` are display snapshots
/// taken at creation time; they do not track later renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub space_id: SpaceId,
    pub profile_id: ProfileId,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
    /// Informational only. Every booking occupies exactly one slot.
    pub end_time: TimeSlot,
    pub status: ReservationStatus,
    pub user_name: String,
    pub space_name: String,
}

impl Reservation {
    /// Whether this record holds its `(space, date, slot)` triple.
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    pub fn occupies(&self, space_id: &SpaceId, date: NaiveDate, start_time: TimeSlot) -> bool {
        self.is_active()
            && self.space_id == *space_id
            && self.date == date
            && self.start_time == start_time
    }
}

/// `Pending` is reserved in the type space; the booking engine only ever
/// produces `Confirmed` records and the single transition
/// `Confirmed -> Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}
