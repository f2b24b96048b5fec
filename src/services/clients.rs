use crate::domain::{EntityKind, EntityRef};
use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::forms::client::ClientForm;
use crate::pagination::{PageRequest, Paged};
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult, typed_id};

/// Fetches a single client.
pub fn get_client<R>(repo: &R, id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id: ClientId = typed_id(EntityKind::Client, id)?;
    repo.get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound(EntityRef::new(EntityKind::Client, id)))
}

pub fn list_clients<R>(repo: &R, page: PageRequest) -> ServiceResult<Paged<Client>>
where
    R: ClientReader + ?Sized,
{
    Ok(repo.list_clients(page)?)
}

/// Validates the payload and registers a new client.
pub fn create_client<R>(repo: &R, form: ClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    let new_client = NewClient::try_from(form)?;
    let client = repo.create_client(&new_client)?;
    log::info!("Created client {}", client.id);
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ClientEmail, ClientId, ClientName};
    use crate::repository::mock::MockRepository;

    fn client(id: i32) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            name: ClientName::new("Ada").unwrap(),
            email: ClientEmail::new("ada@example.com").unwrap(),
        }
    }

    #[test]
    fn missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));

        let result = get_client(&repo, 3);

        assert!(matches!(
            result,
            Err(ServiceError::NotFound(EntityRef {
                kind: EntityKind::Client,
                id: 3
            }))
        ));
    }

    #[test]
    fn existing_client_is_returned() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .withf(|id| id.get() == 3)
            .returning(|_| Ok(Some(client(3))));

        assert_eq!(get_client(&repo, 3).unwrap().id.get(), 3);
    }

    #[test]
    fn invalid_form_never_reaches_repository() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().times(0);

        let form = ClientForm {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
        };

        assert!(matches!(
            create_client(&repo, form),
            Err(ServiceError::Form(_))
        ));
    }
}
