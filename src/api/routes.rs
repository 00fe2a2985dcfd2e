// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Form-style generation, as submitted by the web page
    cfg.route("/generate", web::get().to(handlers::generator::generate_from_query));

    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/last-error", web::get().to(handlers::generator::last_error))
    );

    // System routes
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status))
    );
}
