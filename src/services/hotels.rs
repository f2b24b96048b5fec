use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::types::HotelId;
use crate::domain::{EntityKind, EntityRef, Identifiable};
use crate::forms::hotel::HotelForm;
use crate::pagination::{PageRequest, Paged};
use crate::repository::{DestinationReader, HotelReader, HotelWriter};
use crate::services::{ServiceError, ServiceResult, typed_id};

pub fn get_hotel<R>(repo: &R, id: i32) -> ServiceResult<Hotel>
where
    R: HotelReader + ?Sized,
{
    let hotel_id: HotelId = typed_id(EntityKind::Hotel, id)?;
    repo.get_hotel_by_id(hotel_id)?
        .ok_or(ServiceError::NotFound(EntityRef::new(EntityKind::Hotel, id)))
}

pub fn list_hotels<R>(repo: &R, page: PageRequest) -> ServiceResult<Paged<Hotel>>
where
    R: HotelReader + ?Sized,
{
    Ok(repo.list_hotels(page)?)
}

/// Registers a hotel at an existing destination.
pub fn create_hotel<R>(repo: &R, form: HotelForm) -> ServiceResult<Hotel>
where
    R: HotelWriter + DestinationReader + ?Sized,
{
    let new_hotel = NewHotel::try_from(form)?;

    if repo.get_destination_by_id(new_hotel.destination_id)?.is_none() {
        return Err(ServiceError::NotFound(EntityRef::new(
            EntityKind::Destination,
            new_hotel.destination_id.get(),
        )));
    }

    let hotel = repo.create_hotel(&new_hotel)?;
    log::info!("Created {}", hotel.entity_ref());
    Ok(hotel)
}
