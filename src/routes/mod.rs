//! HTTP surface of the bookings API.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde::Serialize;

use crate::domain::Identifiable;
use crate::dto::{HealthStatus, PageQuery};
use crate::models::config::ServerConfig;
use crate::pagination::{PageRequest, Paged};
use crate::routes::problem::ApiError;
use crate::services::resolve_page;

pub mod clients;
pub mod destinations;
pub mod flights;
pub mod hotels;
pub mod problem;
pub mod trips;

/// Header carrying [`crate::pagination::PaginationMetadata`] as JSON.
pub const PAGINATION_HEADER: &str = "X-Pagination";

/// Registers extractor error handlers, the health probe and the `/api/v1`
/// scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(health)
    .service(
        web::scope("/api/v1")
            .service(clients::list_clients)
            .service(clients::show_client)
            .service(clients::create_client)
            .service(flights::list_flights)
            .service(flights::show_flight)
            .service(flights::create_flight)
            .service(destinations::list_destinations)
            .service(destinations::show_destination)
            .service(destinations::create_destination)
            .service(hotels::list_hotels)
            .service(hotels::show_hotel)
            .service(hotels::create_hotel)
            .service(trips::list_trips)
            .service(trips::show_trip)
            .service(trips::create_trip)
            .service(trips::delete_trip),
    );
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus { status: "ok" })
}

/// Resolves list query parameters against the configured page sizes.
pub fn page_request(query: &PageQuery, config: &ServerConfig) -> Result<PageRequest, ApiError> {
    Ok(resolve_page(
        query.page,
        query.page_size,
        config.default_page_size,
        config.max_page_size,
    )?)
}

/// Renders a page as a JSON array with its position in `X-Pagination`.
pub fn paged_response<T: Serialize>(page: Paged<T>) -> Result<HttpResponse, ApiError> {
    let metadata = serde_json::to_string(&page.metadata())
        .map_err(|e| ApiError::Internal(format!("failed to encode pagination metadata: {e}")))?;

    Ok(HttpResponse::Ok()
        .insert_header((PAGINATION_HEADER, metadata))
        .json(page.items))
}

/// Renders a newly stored entity as `201 Created` pointing at its resource.
pub fn created_response<T: Identifiable + Serialize>(entity: T) -> HttpResponse {
    let location = format!("/api/v1/{}/{}", T::KIND.collection(), entity.id());
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(entity)
}
