use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::{ProfileId, ReservationId, SpaceId},
    reservation::{
        event::{CancelReservation, CreateReservation},
        Reservation, ReservationStatus,
    },
    slot::TimeSlot,
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::{catalog, store::SharedStore};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    store: SharedStore,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        // Pre-checks against the static catalog:
        // - the requested space must exist
        // - the requested time must be on the daily schedule
        let space = catalog::find_space(&event.space_id).ok_or_else(|| {
            AppError::EntityNotFound(format!("space ({}) was not found", event.space_id))
        })?;

        if !catalog::time_slots().contains(&event.start_time) {
            return Err(AppError::UnprocessableEntity(format!(
                "{} is not on the daily schedule",
                event.start_time
            )));
        }

        // The conflict check and the insert share one write guard, so
        // the at-most-one-confirmed-booking invariant holds even if a
        // caller skipped the advisory availability query.
        let mut state = self.store.write();

        let profile = state.find_profile(&event.requested_by).ok_or_else(|| {
            AppError::EntityNotFound(format!("profile ({}) was not found", event.requested_by))
        })?;

        let taken = state
            .ledger
            .iter()
            .any(|r| r.occupies(&event.space_id, event.date, event.start_time));
        if taken {
            return Err(AppError::ReservationConflict(format!(
                "{} already has a confirmed booking for {} at {}",
                space.name, event.date, event.start_time
            )));
        }

        let reservation = Reservation {
            id: ReservationId::new(),
            space_id: event.space_id,
            profile_id: profile.id,
            date: event.date,
            start_time: event.start_time,
            end_time: event.start_time.following(),
            status: ReservationStatus::Confirmed,
            user_name: profile.full_name,
            space_name: space.name,
        };

        // Most recent first, matching how the ledger is displayed.
        state.ledger.insert(0, reservation.clone());
        self.store.persist(&state);

        Ok(reservation)
    }

    async fn cancel(&self, event: CancelReservation) -> AppResult<()> {
        let mut state = self.store.write();

        let transitioned = match state
            .ledger
            .iter_mut()
            .find(|r| r.id == event.reservation_id)
        {
            Some(r) if r.status == ReservationStatus::Confirmed => {
                r.status = ReservationStatus::Cancelled;
                true
            }
            // Unknown id, or already cancelled: idempotent no-op.
            _ => false,
        };

        if transitioned {
            self.store.persist(&state);
        }
        Ok(())
    }

    async fn is_slot_taken(
        &self,
        space_id: &SpaceId,
        date: NaiveDate,
        start_time: TimeSlot,
    ) -> AppResult<bool> {
        let state = self.store.read();
        Ok(state
            .ledger
            .iter()
            .any(|r| r.occupies(space_id, date, start_time)))
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.store.read().ledger.clone())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self
            .store
            .read()
            .ledger
            .iter()
            .find(|r| r.id == reservation_id)
            .cloned())
    }

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> AppResult<Vec<Reservation>> {
        Ok(self
            .store
            .read()
            .ledger
            .iter()
            .filter(|r| r.profile_id == *profile_id)
            .cloned()
            .collect())
    }
}
