use diesel::prelude::*;

use crate::domain::destination::{Destination, NewDestination};
use crate::domain::types::DestinationId;
use crate::models::destination::{
    Destination as DbDestination, NewDestination as DbNewDestination,
};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DestinationReader, DestinationWriter, DieselRepository, load_page};

impl DestinationReader for DieselRepository {
    fn get_destination_by_id(&self, id: DestinationId) -> RepositoryResult<Option<Destination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let destination = destinations::table
            .find(id.get())
            .first::<DbDestination>(&mut conn)
            .optional()?;

        Ok(destination.map(Destination::try_from).transpose()?)
    }

    fn list_destinations(&self, page: PageRequest) -> RepositoryResult<Paged<Destination>> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        load_page(
            &mut conn,
            page,
            |conn, limit, offset| {
                destinations::table
                    .filter(destinations::id.gt(0))
                    .order(destinations::id.asc())
                    .limit(limit)
                    .offset(offset)
                    .load::<DbDestination>(conn)
            },
            |conn| destinations::table.count().get_result(conn),
        )
    }
}

impl DestinationWriter for DieselRepository {
    fn create_destination(
        &self,
        new_destination: &NewDestination,
    ) -> RepositoryResult<Destination> {
        use crate::schema::destinations;

        let mut conn = self.conn()?;
        let insertable: DbNewDestination = new_destination.into();
        let created = diesel::insert_into(destinations::table)
            .values(&insertable)
            .get_result::<DbDestination>(&mut conn)?;

        Ok(Destination::try_from(created)?)
    }
}
