use actix_web::{HttpResponse, get, post, web};

use crate::dto::PageQuery;
use crate::forms::hotel::HotelForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::problem::ApiError;
use crate::routes::{created_response, page_request, paged_response};
use crate::services::hotels;

#[get("/hotels")]
pub async fn list_hotels(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = page_request(&query, &config)?;
    paged_response(hotels::list_hotels(repo.get_ref(), page)?)
}

#[get("/hotels/{id}")]
pub async fn show_hotel(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let hotel = hotels::get_hotel(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(hotel))
}

#[post("/hotels")]
pub async fn create_hotel(
    _user: AuthenticatedUser,
    form: web::Json<HotelForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let hotel = hotels::create_hotel(repo.get_ref(), form.into_inner())?;
    Ok(created_response(hotel))
}
