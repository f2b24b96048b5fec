use diesel::prelude::*;

use crate::domain::destination::{
    Destination as DomainDestination, NewDestination as DomainNewDestination,
};
use crate::domain::types::{DestinationId, DestinationName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct Destination {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::destinations)]
pub struct NewDestination<'a> {
    pub name: &'a str,
}

impl TryFrom<Destination> for DomainDestination {
    type Error = TypeConstraintError;

    fn try_from(destination: Destination) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DestinationId::new(destination.id)?,
            name: DestinationName::new(destination.name)?,
        })
    }
}

impl<'a> From<&'a DomainNewDestination> for NewDestination<'a> {
    fn from(destination: &'a DomainNewDestination) -> Self {
        Self {
            name: destination.name.as_str(),
        }
    }
}
