use crate::domain::destination::{Destination, NewDestination};
use crate::domain::types::DestinationId;
use crate::domain::{EntityKind, EntityRef};
use crate::forms::destination::DestinationForm;
use crate::pagination::{PageRequest, Paged};
use crate::repository::{DestinationReader, DestinationWriter};
use crate::services::{ServiceError, ServiceResult, typed_id};

pub fn get_destination<R>(repo: &R, id: i32) -> ServiceResult<Destination>
where
    R: DestinationReader + ?Sized,
{
    let destination_id: DestinationId = typed_id(EntityKind::Destination, id)?;
    repo.get_destination_by_id(destination_id)?
        .ok_or(ServiceError::NotFound(EntityRef::new(
            EntityKind::Destination,
            id,
        )))
}

pub fn list_destinations<R>(repo: &R, page: PageRequest) -> ServiceResult<Paged<Destination>>
where
    R: DestinationReader + ?Sized,
{
    Ok(repo.list_destinations(page)?)
}

pub fn create_destination<R>(repo: &R, form: DestinationForm) -> ServiceResult<Destination>
where
    R: DestinationWriter + ?Sized,
{
    let new_destination = NewDestination::try_from(form)?;
    let destination = repo.create_destination(&new_destination)?;
    log::info!("Created destination {}", destination.id);
    Ok(destination)
}
