use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::trip::{NewTrip as DomainNewTrip, Trip as DomainTrip};
use crate::domain::types::{ClientId, FlightId, HotelId, TripId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trips)]
/// Diesel model for [`crate::domain::trip::Trip`].
pub struct Trip {
    pub id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client_id: i32,
    pub outbound_flight_id: i32,
    pub inbound_flight_id: i32,
    pub hotel_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::trips)]
pub struct NewTrip {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client_id: i32,
    pub outbound_flight_id: i32,
    pub inbound_flight_id: i32,
    pub hotel_id: i32,
}

impl TryFrom<Trip> for DomainTrip {
    type Error = TypeConstraintError;

    fn try_from(trip: Trip) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TripId::new(trip.id)?,
            start_date: trip.start_date,
            end_date: trip.end_date,
            client_id: ClientId::new(trip.client_id)?,
            outbound_flight_id: FlightId::new(trip.outbound_flight_id)?,
            inbound_flight_id: FlightId::new(trip.inbound_flight_id)?,
            hotel_id: HotelId::new(trip.hotel_id)?,
        })
    }
}

impl From<&DomainNewTrip> for NewTrip {
    fn from(trip: &DomainNewTrip) -> Self {
        Self {
            start_date: trip.start_date,
            end_date: trip.end_date,
            client_id: trip.client_id.get(),
            outbound_flight_id: trip.outbound_flight_id.get(),
            inbound_flight_id: trip.inbound_flight_id.get(),
            hotel_id: trip.hotel_id.get(),
        }
    }
}
