//! RFC 7807 problem documents for every failing API call.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::services::ServiceError;

pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

const GENERIC_DETAIL: &str = "An unexpected error occurred. Quote the trace id when reporting it.";

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// Problem details body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    pub trace_id: String,
}

impl ApiError {
    fn problem_type(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => "https://www.rfc-editor.org/rfc/rfc9110#section-15.5.5",
            StatusCode::BAD_REQUEST => "https://www.rfc-editor.org/rfc/rfc9110#section-15.5.1",
            StatusCode::UNAUTHORIZED => "https://www.rfc-editor.org/rfc/rfc9110#section-15.5.2",
            _ => "https://www.rfc-editor.org/rfc/rfc9110#section-15.6.1",
        }
    }

    fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            _ => "Internal Server Error",
        }
    }

    /// Builds the problem document. Server-side failures get a generic
    /// detail; the real cause is only logged.
    pub fn to_problem_details(&self) -> ProblemDetails {
        let status = self.status_code();
        let trace_id = Uuid::new_v4().to_string();

        let detail = if status.is_server_error() {
            log::error!("Request failed [{trace_id}]: {self}");
            GENERIC_DETAIL.to_string()
        } else {
            self.to_string()
        };

        ProblemDetails {
            problem_type: self.problem_type(),
            title: self.title(),
            status: status.as_u16(),
            detail,
            trace_id,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err {
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::InvalidArgument(_)
                | ServiceError::Form(_)
                | ServiceError::TypeConstraint(_) => StatusCode::BAD_REQUEST,
                ServiceError::InvariantViolation(_) | ServiceError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let problem = self.to_problem_details();
        HttpResponse::build(self.status_code())
            .content_type(PROBLEM_CONTENT_TYPE)
            .json(problem)
    }
}
