use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::flight::NewFlight;
use crate::domain::types::{Airport, FlightNumber};
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_schedule"))]
/// Payload for registering a flight.
pub struct FlightForm {
    #[validate(length(min = 1, max = 16))]
    pub flight_number: String,
    #[validate(length(min = 1, max = 100))]
    pub departure_airport: String,
    #[validate(length(min = 1, max = 100))]
    pub arrival_airport: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

fn validate_schedule(form: &FlightForm) -> Result<(), ValidationError> {
    if form.arrival_time < form.departure_time {
        return Err(ValidationError::new("arrival_before_departure"));
    }
    Ok(())
}

impl TryFrom<FlightForm> for NewFlight {
    type Error = FormError;

    fn try_from(form: FlightForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewFlight::try_new(
            FlightNumber::new(form.flight_number)?,
            Airport::new(form.departure_airport)?,
            Airport::new(form.arrival_airport)?,
            form.departure_time,
            form.arrival_time,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn arrival_before_departure_is_rejected() {
        let form = FlightForm {
            flight_number: "TP1350".to_string(),
            departure_airport: "LIS".to_string(),
            arrival_airport: "FRA".to_string(),
            departure_time: at("2024-06-01 10:00"),
            arrival_time: at("2024-06-01 09:00"),
        };
        assert!(matches!(
            NewFlight::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn valid_schedule_is_accepted() {
        let form = FlightForm {
            flight_number: "TP1350".to_string(),
            departure_airport: "LIS".to_string(),
            arrival_airport: "FRA".to_string(),
            departure_time: at("2024-06-01 10:00"),
            arrival_time: at("2024-06-01 14:00"),
        };
        let flight = NewFlight::try_from(form).unwrap();
        assert_eq!(flight.flight_number.as_str(), "TP1350");
    }
}
