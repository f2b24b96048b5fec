use serde::Serialize;

use crate::domain::types::{DestinationId, DestinationName};
use crate::domain::{EntityKind, Identifiable};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Destination {
    pub id: DestinationId,
    pub name: DestinationName,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDestination {
    pub name: DestinationName,
}

impl NewDestination {
    #[must_use]
    pub fn new(name: DestinationName) -> Self {
        Self { name }
    }
}

impl Identifiable for Destination {
    const KIND: EntityKind = EntityKind::Destination;

    fn id(&self) -> i32 {
        self.id.get()
    }
}
