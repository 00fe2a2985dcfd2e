// src/api/handlers/system.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::StatusResponse;
use crate::api::AppState;

/// Get system status
///
/// Reports the word list state without triggering a load.
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current service status", body = StatusResponse)
    )
)]
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        dictionary: state.generator.dictionary_status().into(),
        mixed_case_characters: state.generator.mixed_case_characters(),
    })
}
