use actix_web::{HttpResponse, delete, get, post, web};

use crate::dto::PageQuery;
use crate::forms::trip::TripForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::problem::ApiError;
use crate::routes::{created_response, page_request, paged_response};
use crate::services::trips;

#[get("/trips")]
pub async fn list_trips(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = page_request(&query, &config)?;
    paged_response(trips::list_trips(repo.get_ref(), page)?)
}

/// Returns the trip with its client, flights, hotel and destination inlined.
#[get("/trips/{id}")]
pub async fn show_trip(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let trip = trips::get_trip(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(trip))
}

#[post("/trips")]
pub async fn create_trip(
    _user: AuthenticatedUser,
    form: web::Json<TripForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let trip = trips::create_trip(repo.get_ref(), form.into_inner())?;
    Ok(created_response(trip))
}

#[delete("/trips/{id}")]
pub async fn delete_trip(
    user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    trips::delete_trip(repo.get_ref(), id)?;
    log::info!("Trip {id} cancelled by {}", user.email);
    Ok(HttpResponse::NoContent().finish())
}
