use chrono::NaiveDate;
use derive_new::new;

use crate::model::{
    id::{ProfileId, ReservationId, SpaceId},
    slot::TimeSlot,
};

#[derive(Debug, new)]
pub struct CreateReservation {
    pub space_id: SpaceId,
    pub requested_by: ProfileId,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
}

#[derive(Debug, new)]
pub struct CancelReservation {
    pub reservation_id: ReservationId,
}
