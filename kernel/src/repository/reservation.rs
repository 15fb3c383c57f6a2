use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    id::{ProfileId, ReservationId, SpaceId},
    reservation::{
        event::{CancelReservation, CreateReservation},
        Reservation,
    },
    slot::TimeSlot,
};

/// The booking engine over the reservation ledger. The ledger is the
/// sole source of truth for conflicts and history.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Creates a confirmed reservation. The conflict check and the
    /// insert must form one atomic operation: at most one confirmed
    /// reservation may exist per `(space, date, slot)` triple.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    /// Marks a reservation cancelled. Idempotent: an unknown id or an
    /// already-cancelled record is a no-op, not an error.
    async fn cancel(&self, event: CancelReservation) -> AppResult<()>;
    /// Pure query: is there a confirmed reservation for the triple?
    async fn is_slot_taken(
        &self,
        space_id: &SpaceId,
        date: NaiveDate,
        start_time: TimeSlot,
    ) -> AppResult<bool>;
    /// The full ledger, most recent first, cancelled records included.
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// A profile's bookings, most recent first.
    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> AppResult<Vec<Reservation>>;
}
