//! Business operations invoked by the HTTP handlers.
//!
//! Services are generic over the repository traits they need so they can be
//! exercised against `mockall` mocks.

use thiserror::Error;

use crate::domain::{EntityKind, EntityRef};
use crate::forms::FormError;
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryError;

pub mod clients;
pub mod destinations;
pub mod flights;
pub mod hotels;
pub mod trips;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(EntityRef),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    /// Stored data contradicts an invariant the service relies on.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DanglingReference(_) => {
                ServiceError::InvariantViolation(err.to_string())
            }
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

/// Converts a raw path id into a typed id. Ids that cannot exist are
/// reported as not found.
pub(crate) fn typed_id<T: TryFrom<i32>>(kind: EntityKind, id: i32) -> ServiceResult<T> {
    T::try_from(id).map_err(|_| ServiceError::NotFound(EntityRef::new(kind, id)))
}

/// Resolves optional paging parameters against the configured limits.
///
/// Missing values fall back to page one and `default_size`. A size above
/// `max_size`, or a page or size of zero, is an invalid argument.
pub fn resolve_page(
    page: Option<usize>,
    page_size: Option<usize>,
    default_size: usize,
    max_size: usize,
) -> ServiceResult<PageRequest> {
    let page_size = page_size.unwrap_or(default_size);
    if page_size > max_size {
        return Err(ServiceError::InvalidArgument(format!(
            "page size must not exceed {max_size} (got {page_size})"
        )));
    }
    Ok(PageRequest::new(page.unwrap_or(1), page_size)?)
}
