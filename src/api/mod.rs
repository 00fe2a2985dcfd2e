// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use crate::core::Config;
use crate::generators::PasswordGenerator;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

pub mod types;
pub mod routes;
pub mod handlers;

/// Shared state handed to every handler.
pub struct AppState {
    pub generator: Arc<PasswordGenerator>,
    pub default_length: usize,
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_from_query,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::last_error,
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::models::CasePolicy,
            crate::generators::ErrorKind,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::LastErrorResponse,
            crate::api::types::DictionaryStatusResponse,
            crate::api::types::StatusResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "RustPassgen API",
        version = "0.1.0",
        description = "Password generator with character and dictionary-word modes",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(generator: Arc<PasswordGenerator>, config: &Config) -> std::io::Result<()> {
    log::info!("Starting password generator API on {}:{}", config.web_address, config.web_port);

    let state = web::Data::new(AppState {
        generator,
        default_length: config.default_password_length,
    });

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/generate", "/generator/password", "/generator/last-error", "/system/status"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
