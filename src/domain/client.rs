use serde::Serialize;

use crate::domain::types::{ClientEmail, ClientId, ClientName};
use crate::domain::{EntityKind, Identifiable};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub email: ClientEmail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub email: ClientEmail,
}

impl NewClient {
    #[must_use]
    pub fn new(name: ClientName, email: ClientEmail) -> Self {
        Self { name, email }
    }
}

impl Identifiable for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> i32 {
        self.id.get()
    }
}
