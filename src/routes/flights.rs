use actix_web::{HttpResponse, get, post, web};

use crate::dto::PageQuery;
use crate::forms::flight::FlightForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::problem::ApiError;
use crate::routes::{created_response, page_request, paged_response};
use crate::services::flights;

#[get("/flights")]
pub async fn list_flights(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = page_request(&query, &config)?;
    paged_response(flights::list_flights(repo.get_ref(), page)?)
}

#[get("/flights/{id}")]
pub async fn show_flight(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let flight = flights::get_flight(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(flight))
}

#[post("/flights")]
pub async fn create_flight(
    _user: AuthenticatedUser,
    form: web::Json<FlightForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let flight = flights::create_flight(repo.get_ref(), form.into_inner())?;
    Ok(created_response(flight))
}
