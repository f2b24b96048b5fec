use diesel::prelude::*;

use crate::domain::flight::{Flight, NewFlight};
use crate::domain::types::FlightId;
use crate::models::flight::{Flight as DbFlight, NewFlight as DbNewFlight};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, FlightReader, FlightWriter, load_page};

impl FlightReader for DieselRepository {
    fn get_flight_by_id(&self, id: FlightId) -> RepositoryResult<Option<Flight>> {
        use crate::schema::flights;

        let mut conn = self.conn()?;
        let flight = flights::table
            .find(id.get())
            .first::<DbFlight>(&mut conn)
            .optional()?;

        Ok(flight.map(Flight::try_from).transpose()?)
    }

    fn list_flights(&self, page: PageRequest) -> RepositoryResult<Paged<Flight>> {
        use crate::schema::flights;

        let mut conn = self.conn()?;
        load_page(
            &mut conn,
            page,
            |conn, limit, offset| {
                flights::table
                    .filter(flights::id.gt(0))
                    .order(flights::id.asc())
                    .limit(limit)
                    .offset(offset)
                    .load::<DbFlight>(conn)
            },
            |conn| flights::table.count().get_result(conn),
        )
    }
}

impl FlightWriter for DieselRepository {
    fn create_flight(&self, new_flight: &NewFlight) -> RepositoryResult<Flight> {
        use crate::schema::flights;

        let mut conn = self.conn()?;
        let insertable: DbNewFlight = new_flight.into();
        let created = diesel::insert_into(flights::table)
            .values(&insertable)
            .get_result::<DbFlight>(&mut conn)?;

        Ok(Flight::try_from(created)?)
    }
}
