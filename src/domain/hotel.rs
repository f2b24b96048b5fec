use serde::Serialize;

use crate::domain::destination::Destination;
use crate::domain::types::{DestinationId, HotelId, HotelName, Price, StarRating};
use crate::domain::{EntityKind, Identifiable};

/// Hotel row as stored: the destination is referenced by id only.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Hotel {
    pub id: HotelId,
    pub name: HotelName,
    pub stars: StarRating,
    pub price: Price,
    pub destination_id: DestinationId,
}

/// Hotel with its owning destination resolved.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HotelDetails {
    pub id: HotelId,
    pub name: HotelName,
    pub stars: StarRating,
    pub price: Price,
    pub destination: Destination,
}

impl HotelDetails {
    #[must_use]
    pub fn new(hotel: Hotel, destination: Destination) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            stars: hotel.stars,
            price: hotel.price,
            destination,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewHotel {
    pub name: HotelName,
    pub stars: StarRating,
    pub price: Price,
    pub destination_id: DestinationId,
}

impl NewHotel {
    #[must_use]
    pub fn new(
        name: HotelName,
        stars: StarRating,
        price: Price,
        destination_id: DestinationId,
    ) -> Self {
        Self {
            name,
            stars,
            price,
            destination_id,
        }
    }
}

impl Identifiable for Hotel {
    const KIND: EntityKind = EntityKind::Hotel;

    fn id(&self) -> i32 {
        self.id.get()
    }
}
