use diesel::prelude::*;

use crate::domain::hotel::{Hotel as DomainHotel, NewHotel as DomainNewHotel};
use crate::domain::types::{
    DestinationId, HotelId, HotelName, Price, StarRating, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::hotels)]
/// Diesel model for [`crate::domain::hotel::Hotel`].
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub stars: i32,
    pub price: f64,
    pub destination_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::hotels)]
pub struct NewHotel<'a> {
    pub name: &'a str,
    pub stars: i32,
    pub price: f64,
    pub destination_id: i32,
}

impl TryFrom<Hotel> for DomainHotel {
    type Error = TypeConstraintError;

    fn try_from(hotel: Hotel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: HotelId::new(hotel.id)?,
            name: HotelName::new(hotel.name)?,
            stars: StarRating::new(hotel.stars)?,
            price: Price::new(hotel.price)?,
            destination_id: DestinationId::new(hotel.destination_id)?,
        })
    }
}

impl<'a> From<&'a DomainNewHotel> for NewHotel<'a> {
    fn from(hotel: &'a DomainNewHotel) -> Self {
        Self {
            name: hotel.name.as_str(),
            stars: hotel.stars.get(),
            price: hotel.price.get(),
            destination_id: hotel.destination_id.get(),
        }
    }
}
