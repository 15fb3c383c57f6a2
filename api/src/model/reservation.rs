use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ProfileId, ReservationId, SpaceId},
    reservation::{event::CreateReservation, Reservation, ReservationStatus},
    slot::TimeSlot,
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(length(min = 1))]
    pub space_id: String,
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(length(min = 1))]
    pub start_time: String,
}

/// Pairs the request body with the acting profile resolved from the
/// request, the way the booking engine consumes it.
#[derive(new)]
pub struct CreateReservationRequestWithProfileId(ProfileId, CreateReservationRequest);

impl TryFrom<CreateReservationRequestWithProfileId> for CreateReservation {
    type Error = AppError;

    fn try_from(value: CreateReservationRequestWithProfileId) -> Result<Self, Self::Error> {
        let CreateReservationRequestWithProfileId(
            profile_id,
            CreateReservationRequest {
                space_id,
                date,
                start_time,
            },
        ) = value;
        let start_time: TimeSlot = start_time
            .parse()
            .map_err(|_| AppError::UnprocessableEntity(format!("invalid time slot: {start_time}")))?;
        Ok(CreateReservation::new(
            SpaceId::from(space_id),
            profile_id,
            date,
            start_time,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub space_id: SpaceId,
    pub profile_id: ProfileId,
    pub date: NaiveDate,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
    pub status: ReservationStatusName,
    pub user_name: String,
    pub space_name: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            space_id,
            profile_id,
            date,
            start_time,
            end_time,
            status,
            user_name,
            space_name,
        } = value;
        Self {
            id,
            space_id,
            profile_id,
            date,
            start_time,
            end_time,
            status: status.into(),
            user_name,
            space_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, strum::VariantNames)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatusName {
    Confirmed,
    Pending,
    Cancelled,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Confirmed => Self::Confirmed,
            ReservationStatus::Pending => Self::Pending,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_response_uses_camel_case_and_lowercase_status() -> anyhow::Result<()> {
        let start_time: TimeSlot = "15:00".parse()?;
        let reservation = Reservation {
            id: ReservationId::new(),
            space_id: SpaceId::from("3"),
            profile_id: ProfileId::from("res-1"),
            date: "2024-07-04".parse()?,
            start_time,
            end_time: start_time.following(),
            status: ReservationStatus::Confirmed,
            user_name: "María García".into(),
            space_name: "Quincho".into(),
        };

        let json = serde_json::to_value(ReservationResponse::from(reservation))?;
        assert_eq!(json["spaceId"], "3");
        assert_eq!(json["startTime"], "15:00");
        assert_eq!(json["endTime"], "16:00");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["userName"], "María García");
        assert_eq!(json["spaceName"], "Quincho");
        Ok(())
    }

    #[test]
    fn create_request_rejects_a_malformed_time() {
        let req = CreateReservationRequest {
            space_id: "1".into(),
            date: "2024-06-01".parse().unwrap(),
            start_time: "quarter past ten".into(),
        };
        let res = CreateReservation::try_from(CreateReservationRequestWithProfileId::new(
            ProfileId::from("res-1"),
            req,
        ));
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
    }
}
