use actix_web::HttpResponse;
use log::error;
use serde_json::json;

use crate::services::ServiceError;

pub mod client;

/// Maps a service failure to its transport status: 404 for missing lookups,
/// 409 for duplicate keys, 400 for rejected input, 500 otherwise.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    let message = err.to_string();
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(json!({ "error": message })),
        ServiceError::DuplicateKey(_) => HttpResponse::Conflict().json(json!({ "error": message })),
        ServiceError::InvalidInput(_) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Export(_) | ServiceError::Repository(_) => {
            error!("Request failed: {message}");
            HttpResponse::InternalServerError().json(json!({ "error": message }))
        }
    }
}
