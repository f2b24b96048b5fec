use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{Airport, FlightId, FlightNumber, TypeConstraintError};
use crate::domain::{EntityKind, Identifiable};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: FlightNumber,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewFlight {
    pub flight_number: FlightNumber,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

impl NewFlight {
    /// Builds a flight schedule, rejecting an arrival before the departure.
    pub fn try_new(
        flight_number: FlightNumber,
        departure_airport: Airport,
        arrival_airport: Airport,
        departure_time: NaiveDateTime,
        arrival_time: NaiveDateTime,
    ) -> Result<Self, TypeConstraintError> {
        if arrival_time < departure_time {
            return Err(TypeConstraintError::InvalidRange("arrival time"));
        }

        Ok(Self {
            flight_number,
            departure_airport,
            arrival_airport,
            departure_time,
            arrival_time,
        })
    }
}

impl Identifiable for Flight {
    const KIND: EntityKind = EntityKind::Flight;

    fn id(&self) -> i32 {
        self.id.get()
    }
}
