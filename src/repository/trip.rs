use diesel::prelude::*;

use crate::domain::client::Client;
use crate::domain::destination::Destination;
use crate::domain::flight::Flight;
use crate::domain::hotel::{Hotel, HotelDetails};
use crate::domain::trip::{NewTrip, Trip, TripDetails};
use crate::domain::types::TripId;
use crate::domain::{EntityKind, EntityRef};
use crate::models::client::Client as DbClient;
use crate::models::destination::Destination as DbDestination;
use crate::models::flight::Flight as DbFlight;
use crate::models::hotel::Hotel as DbHotel;
use crate::models::trip::{NewTrip as DbNewTrip, Trip as DbTrip};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TripReader, TripWriter, load_page};

/// Records `reference` as missing when `row` is absent.
fn require<T>(row: Option<T>, reference: EntityRef, missing: &mut Vec<EntityRef>) -> Option<T> {
    if row.is_none() {
        missing.push(reference);
    }
    row
}

impl TripReader for DieselRepository {
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<TripDetails>> {
        use crate::schema::{clients, destinations, flights, hotels, trips};

        let mut conn = self.conn()?;

        let Some(db_trip) = trips::table
            .find(id.get())
            .first::<DbTrip>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };
        let trip = Trip::try_from(db_trip)?;
        let [client_ref, outbound_ref, inbound_ref, hotel_ref] = trip.references();

        // Every reference is looked up before any of them is checked, so a
        // failure reports all missing rows at once.
        let client = clients::table
            .find(client_ref.id)
            .first::<DbClient>(&mut conn)
            .optional()?;
        let outbound = flights::table
            .find(outbound_ref.id)
            .first::<DbFlight>(&mut conn)
            .optional()?;
        let inbound = flights::table
            .find(inbound_ref.id)
            .first::<DbFlight>(&mut conn)
            .optional()?;
        let hotel = hotels::table
            .find(hotel_ref.id)
            .first::<DbHotel>(&mut conn)
            .optional()?;
        let destination = match &hotel {
            Some(hotel) => destinations::table
                .find(hotel.destination_id)
                .first::<DbDestination>(&mut conn)
                .optional()?,
            None => None,
        };

        let mut missing = Vec::new();
        let client = require(client, client_ref, &mut missing);
        let outbound = require(outbound, outbound_ref, &mut missing);
        let inbound = require(inbound, inbound_ref, &mut missing);
        let hotel = require(hotel, hotel_ref, &mut missing);
        // The destination is only known through the hotel.
        let destination = match &hotel {
            Some(hotel) => require(
                destination,
                EntityRef::new(EntityKind::Destination, hotel.destination_id),
                &mut missing,
            ),
            None => None,
        };

        let (Some(client), Some(outbound), Some(inbound), Some(hotel), Some(destination)) =
            (client, outbound, inbound, hotel, destination)
        else {
            log::error!("Trip {id} has dangling references: {missing:?}");
            return Err(RepositoryError::DanglingReference(missing));
        };

        let hotel = HotelDetails::new(
            Hotel::try_from(hotel)?,
            Destination::try_from(destination)?,
        );

        Ok(Some(TripDetails::assemble(
            trip,
            Client::try_from(client)?,
            Flight::try_from(outbound)?,
            Flight::try_from(inbound)?,
            hotel,
        )))
    }

    fn list_trips(&self, page: PageRequest) -> RepositoryResult<Paged<Trip>> {
        use crate::schema::trips;

        let mut conn = self.conn()?;
        load_page(
            &mut conn,
            page,
            |conn, limit, offset| {
                trips::table
                    .filter(trips::id.gt(0))
                    .order(trips::id.asc())
                    .limit(limit)
                    .offset(offset)
                    .load::<DbTrip>(conn)
            },
            |conn| trips::table.count().get_result(conn),
        )
    }
}

impl TripWriter for DieselRepository {
    fn create_trip(&self, new_trip: &NewTrip) -> RepositoryResult<Trip> {
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let insertable: DbNewTrip = new_trip.into();
        let created = diesel::insert_into(trips::table)
            .values(&insertable)
            .get_result::<DbTrip>(&mut conn)?;

        Ok(Trip::try_from(created)?)
    }

    fn delete_trip(&self, id: TripId) -> RepositoryResult<usize> {
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(trips::table.find(id.get())).execute(&mut conn)?;

        Ok(deleted)
    }
}
