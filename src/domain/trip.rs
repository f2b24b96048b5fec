use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::flight::Flight;
use crate::domain::hotel::HotelDetails;
use crate::domain::types::{ClientId, FlightId, HotelId, TripId, TypeConstraintError};
use crate::domain::{EntityKind, EntityRef, Identifiable};

/// Trip row as stored: every related entity is referenced by id.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client_id: ClientId,
    pub outbound_flight_id: FlightId,
    pub inbound_flight_id: FlightId,
    pub hotel_id: HotelId,
}

impl Trip {
    /// Every row this trip points at, in lookup order.
    pub fn references(&self) -> [EntityRef; 4] {
        [
            EntityRef::new(EntityKind::Client, self.client_id.get()),
            EntityRef::new(EntityKind::Flight, self.outbound_flight_id.get()),
            EntityRef::new(EntityKind::Flight, self.inbound_flight_id.get()),
            EntityRef::new(EntityKind::Hotel, self.hotel_id.get()),
        ]
    }
}

/// A trip together with the client, both flights, and the hotel (with its
/// destination) it references.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TripDetails {
    pub id: TripId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client: Client,
    pub outbound_flight: Flight,
    pub inbound_flight: Flight,
    pub hotel: HotelDetails,
}

impl TripDetails {
    #[must_use]
    pub fn assemble(
        trip: Trip,
        client: Client,
        outbound_flight: Flight,
        inbound_flight: Flight,
        hotel: HotelDetails,
    ) -> Self {
        Self {
            id: trip.id,
            start_date: trip.start_date,
            end_date: trip.end_date,
            client,
            outbound_flight,
            inbound_flight,
            hotel,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTrip {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub client_id: ClientId,
    pub outbound_flight_id: FlightId,
    pub inbound_flight_id: FlightId,
    pub hotel_id: HotelId,
}

impl NewTrip {
    /// Builds a booking, rejecting an end date before the start date.
    pub fn try_new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        client_id: ClientId,
        outbound_flight_id: FlightId,
        inbound_flight_id: FlightId,
        hotel_id: HotelId,
    ) -> Result<Self, TypeConstraintError> {
        if end_date < start_date {
            return Err(TypeConstraintError::InvalidRange("end date"));
        }

        Ok(Self {
            start_date,
            end_date,
            client_id,
            outbound_flight_id,
            inbound_flight_id,
            hotel_id,
        })
    }

    /// Every row the new trip will point at, in lookup order.
    pub fn references(&self) -> [EntityRef; 4] {
        [
            EntityRef::new(EntityKind::Client, self.client_id.get()),
            EntityRef::new(EntityKind::Flight, self.outbound_flight_id.get()),
            EntityRef::new(EntityKind::Flight, self.inbound_flight_id.get()),
            EntityRef::new(EntityKind::Hotel, self.hotel_id.get()),
        ]
    }
}

impl Identifiable for Trip {
    const KIND: EntityKind = EntityKind::Trip;

    fn id(&self) -> i32 {
        self.id.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_trip_rejects_end_before_start() {
        let result = NewTrip::try_new(
            date(2024, 6, 10),
            date(2024, 6, 9),
            ClientId::new(1).unwrap(),
            FlightId::new(1).unwrap(),
            FlightId::new(2).unwrap(),
            HotelId::new(1).unwrap(),
        );

        assert_eq!(result, Err(TypeConstraintError::InvalidRange("end date")));
    }

    #[test]
    fn new_trip_accepts_same_day_return() {
        let trip = NewTrip::try_new(
            date(2024, 6, 10),
            date(2024, 6, 10),
            ClientId::new(3).unwrap(),
            FlightId::new(10).unwrap(),
            FlightId::new(11).unwrap(),
            HotelId::new(5).unwrap(),
        )
        .unwrap();

        assert_eq!(
            trip.references(),
            [
                EntityRef::new(EntityKind::Client, 3),
                EntityRef::new(EntityKind::Flight, 10),
                EntityRef::new(EntityKind::Flight, 11),
                EntityRef::new(EntityKind::Hotel, 5),
            ]
        );
    }
}
