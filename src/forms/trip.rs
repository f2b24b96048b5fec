use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::trip::NewTrip;
use crate::domain::types::{ClientId, FlightId, HotelId};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_dates"))]
/// Payload for booking a trip.
pub struct TripForm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1))]
    pub client_id: i32,
    #[validate(range(min = 1))]
    pub outbound_flight_id: i32,
    #[validate(range(min = 1))]
    pub inbound_flight_id: i32,
    #[validate(range(min = 1))]
    pub hotel_id: i32,
}

fn validate_dates(form: &TripForm) -> Result<(), ValidationError> {
    if form.end_date < form.start_date {
        return Err(ValidationError::new("end_before_start"));
    }
    Ok(())
}

impl TryFrom<TripForm> for NewTrip {
    type Error = FormError;

    fn try_from(form: TripForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewTrip::try_new(
            form.start_date,
            form.end_date,
            ClientId::new(form.client_id)?,
            FlightId::new(form.outbound_flight_id)?,
            FlightId::new(form.inbound_flight_id)?,
            HotelId::new(form.hotel_id)?,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(start: &str, end: &str, client_id: i32) -> TripForm {
        TripForm {
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            client_id,
            outbound_flight_id: 10,
            inbound_flight_id: 11,
            hotel_id: 5,
        }
    }

    #[test]
    fn end_before_start_fails_validation() {
        let result = NewTrip::try_from(form("2024-07-10", "2024-07-01", 3));
        let Err(FormError::Validation(errors)) = result else {
            panic!("expected validation errors");
        };
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn non_positive_reference_fails_validation() {
        assert!(matches!(
            NewTrip::try_from(form("2024-07-01", "2024-07-10", 0)),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn valid_booking_converts() {
        let trip = NewTrip::try_from(form("2024-07-01", "2024-07-10", 3)).unwrap();
        assert_eq!(trip.client_id.get(), 3);
        assert_eq!(trip.hotel_id.get(), 5);
    }
}
