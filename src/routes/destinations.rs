use actix_web::{HttpResponse, get, post, web};

use crate::dto::PageQuery;
use crate::forms::destination::DestinationForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::problem::ApiError;
use crate::routes::{created_response, page_request, paged_response};
use crate::services::destinations;

#[get("/destinations")]
pub async fn list_destinations(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = page_request(&query, &config)?;
    paged_response(destinations::list_destinations(repo.get_ref(), page)?)
}

#[get("/destinations/{id}")]
pub async fn show_destination(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let destination = destinations::get_destination(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(destination))
}

#[post("/destinations")]
pub async fn create_destination(
    _user: AuthenticatedUser,
    form: web::Json<DestinationForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let destination = destinations::create_destination(repo.get_ref(), form.into_inner())?;
    Ok(created_response(destination))
}
