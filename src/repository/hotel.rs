use diesel::prelude::*;

use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::types::HotelId;
use crate::models::hotel::{Hotel as DbHotel, NewHotel as DbNewHotel};
use crate::pagination::{PageRequest, Paged};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, HotelReader, HotelWriter, load_page};

impl HotelReader for DieselRepository {
    fn get_hotel_by_id(&self, id: HotelId) -> RepositoryResult<Option<Hotel>> {
        use crate::schema::hotels;

        let mut conn = self.conn()?;
        let hotel = hotels::table
            .find(id.get())
            .first::<DbHotel>(&mut conn)
            .optional()?;

        Ok(hotel.map(Hotel::try_from).transpose()?)
    }

    fn list_hotels(&self, page: PageRequest) -> RepositoryResult<Paged<Hotel>> {
        use crate::schema::hotels;

        let mut conn = self.conn()?;
        load_page(
            &mut conn,
            page,
            |conn, limit, offset| {
                hotels::table
                    .filter(hotels::id.gt(0))
                    .order(hotels::id.asc())
                    .limit(limit)
                    .offset(offset)
                    .load::<DbHotel>(conn)
            },
            |conn| hotels::table.count().get_result(conn),
        )
    }
}

impl HotelWriter for DieselRepository {
    fn create_hotel(&self, new_hotel: &NewHotel) -> RepositoryResult<Hotel> {
        use crate::schema::hotels;

        let mut conn = self.conn()?;
        let insertable: DbNewHotel = new_hotel.into();
        let created = diesel::insert_into(hotels::table)
            .values(&insertable)
            .get_result::<DbHotel>(&mut conn)?;

        Ok(Hotel::try_from(created)?)
    }
}
