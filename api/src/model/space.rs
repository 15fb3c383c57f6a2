use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{id::SpaceId, slot::TimeSlot, space::Space};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<Space>> for SpacesResponse {
    fn from(value: Vec<Space>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub id: SpaceId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub capacity: i32,
    pub description: String,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            id,
            name,
            icon,
            color,
            capacity,
            description,
        } = value;
        Self {
            id,
            name,
            icon,
            color,
            capacity,
            description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    pub items: Vec<TimeSlot>,
}

impl From<Vec<TimeSlot>> for TimeSlotsResponse {
    fn from(value: Vec<TimeSlot>) -> Self {
        Self { items: value }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[garde(skip)]
    pub date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceAvailabilityResponse {
    pub space_id: SpaceId,
    pub date: NaiveDate,
    pub slots: Vec<SlotAvailability>,
}

/// One cell of the booking grid: the view disables `taken` slots, but
/// the authoritative check still happens at creation time.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub time: TimeSlot,
    pub taken: bool,
}
