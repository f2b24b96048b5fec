use crate::domain::flight::{Flight, NewFlight};
use crate::domain::types::FlightId;
use crate::domain::{EntityKind, EntityRef};
use crate::forms::flight::FlightForm;
use crate::pagination::{PageRequest, Paged};
use crate::repository::{FlightReader, FlightWriter};
use crate::services::{ServiceError, ServiceResult, typed_id};

pub fn get_flight<R>(repo: &R, id: i32) -> ServiceResult<Flight>
where
    R: FlightReader + ?Sized,
{
    let flight_id: FlightId = typed_id(EntityKind::Flight, id)?;
    repo.get_flight_by_id(flight_id)?
        .ok_or(ServiceError::NotFound(EntityRef::new(EntityKind::Flight, id)))
}

pub fn list_flights<R>(repo: &R, page: PageRequest) -> ServiceResult<Paged<Flight>>
where
    R: FlightReader + ?Sized,
{
    Ok(repo.list_flights(page)?)
}

pub fn create_flight<R>(repo: &R, form: FlightForm) -> ServiceResult<Flight>
where
    R: FlightWriter + ?Sized,
{
    let new_flight = NewFlight::try_from(form)?;
    let flight = repo.create_flight(&new_flight)?;
    log::info!("Created flight {} ({})", flight.id, flight.flight_number);
    Ok(flight)
}
