use diesel::prelude::*;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, DieselRepository, load_page};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Client::try_from).transpose()?)
    }

    fn list_clients(&self, page: PageRequest) -> RepositoryResult<Paged<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        load_page(
            &mut conn,
            page,
            |conn, limit, offset| {
                clients::table
                    .filter(clients::id.gt(0))
                    .order(clients::id.asc())
                    .limit(limit)
                    .offset(offset)
                    .load::<DbClient>(conn)
            },
            |conn| clients::table.count().get_result(conn),
        )
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(created)?)
    }
}
