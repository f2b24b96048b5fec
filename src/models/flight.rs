use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::flight::{Flight as DomainFlight, NewFlight as DomainNewFlight};
use crate::domain::types::{Airport, FlightId, FlightNumber, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::flights)]
/// Diesel model for [`crate::domain::flight::Flight`].
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::flights)]
pub struct NewFlight<'a> {
    pub flight_number: &'a str,
    pub departure_airport: &'a str,
    pub arrival_airport: &'a str,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
}

impl TryFrom<Flight> for DomainFlight {
    type Error = TypeConstraintError;

    fn try_from(flight: Flight) -> Result<Self, Self::Error> {
        Ok(Self {
            id: FlightId::new(flight.id)?,
            flight_number: FlightNumber::new(flight.flight_number)?,
            departure_airport: Airport::new(flight.departure_airport)?,
            arrival_airport: Airport::new(flight.arrival_airport)?,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
        })
    }
}

impl<'a> From<&'a DomainNewFlight> for NewFlight<'a> {
    fn from(flight: &'a DomainNewFlight) -> Self {
        Self {
            flight_number: flight.flight_number.as_str(),
            departure_airport: flight.departure_airport.as_str(),
            arrival_airport: flight.arrival_airport.as_str(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
        }
    }
}
