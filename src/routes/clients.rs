use actix_web::{HttpResponse, get, post, web};

use crate::dto::PageQuery;
use crate::forms::client::ClientForm;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::problem::ApiError;
use crate::routes::{created_response, page_request, paged_response};
use crate::services::clients;

#[get("/clients")]
pub async fn list_clients(
    _user: AuthenticatedUser,
    query: web::Query<PageQuery>,
    config: web::Data<ServerConfig>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let page = page_request(&query, &config)?;
    paged_response(clients::list_clients(repo.get_ref(), page)?)
}

#[get("/clients/{id}")]
pub async fn show_client(
    _user: AuthenticatedUser,
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let client = clients::get_client(repo.get_ref(), id.into_inner())?;
    Ok(HttpResponse::Ok().json(client))
}

#[post("/clients")]
pub async fn create_client(
    _user: AuthenticatedUser,
    form: web::Json<ClientForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ApiError> {
    let client = clients::create_client(repo.get_ref(), form.into_inner())?;
    Ok(created_response(client))
}
