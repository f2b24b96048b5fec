use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{ClientEmail, ClientId, ClientName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: ClientName::new(client.name)?,
            email: ClientEmail::new(client.email)?,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_creates_newclient() {
        let domain = DomainNewClient::new(
            ClientName::new("John").unwrap(),
            ClientEmail::new("john@example.com").unwrap(),
        );
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, "John");
        assert_eq!(new.email, "john@example.com");
    }

    #[test]
    fn client_into_domain() {
        let db_client = Client {
            id: 1,
            name: "n".to_string(),
            email: "E@Example.com".to_string(),
        };
        let domain = DomainClient::try_from(db_client).unwrap();
        assert_eq!(domain.id.get(), 1);
        assert_eq!(domain.name.as_str(), "n");
        assert_eq!(domain.email.as_str(), "e@example.com");
    }

    #[test]
    fn sentinel_row_is_rejected() {
        let db_client = Client {
            id: 0,
            name: "placeholder".to_string(),
            email: "p@example.com".to_string(),
        };
        assert_eq!(
            DomainClient::try_from(db_client),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
