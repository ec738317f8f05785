use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::dto::client::ClientSearchCriteria;
use crate::forms::client::CreateClientForm;
use crate::repository::client::DieselClientRepository;
use crate::routes::error_response;
use crate::services::client as client_service;

#[derive(Deserialize)]
struct SharedKeyQueryParams {
    #[serde(rename = "sharedKey")]
    shared_key: String,
}

#[get("/clients")]
pub async fn list_clients(repo: web::Data<DieselClientRepository>) -> impl Responder {
    match client_service::list_clients(repo.get_ref()) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(err),
    }
}

#[get("/clients/search")]
pub async fn search_clients_by_shared_key(
    params: web::Query<SharedKeyQueryParams>,
    repo: web::Data<DieselClientRepository>,
) -> impl Responder {
    match client_service::search_clients_by_shared_key(repo.get_ref(), &params.shared_key) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(err),
    }
}

#[post("/clients")]
pub async fn create_client(
    repo: web::Data<DieselClientRepository>,
    web::Json(form): web::Json<CreateClientForm>,
) -> impl Responder {
    // Field validation happens here, before any business logic runs.
    let errors = form.validate();
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "errors": errors }));
    }

    match client_service::create_client(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => error_response(err),
    }
}

#[post("/clients/search/advanced")]
pub async fn search_clients(
    repo: web::Data<DieselClientRepository>,
    web::Json(criteria): web::Json<ClientSearchCriteria>,
) -> impl Responder {
    match client_service::search_clients(repo.get_ref(), &criteria) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => error_response(err),
    }
}

#[post("/clients/export")]
pub async fn export_clients(
    repo: web::Data<DieselClientRepository>,
    web::Json(criteria): web::Json<ClientSearchCriteria>,
) -> impl Responder {
    match client_service::export_clients(repo.get_ref(), &criteria) {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ))
            .body(file.bytes),
        Err(err) => error_response(err),
    }
}
