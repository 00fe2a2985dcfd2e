// src/api/handlers/generator.rs

use std::sync::Arc;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use log::debug;

use crate::api::types::{
    GenerateQuery, LastErrorResponse, PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::api::AppState;
use crate::generators::ErrorKind;
use crate::models::GenerationRequest;

/// Generate a password from form/query parameters
///
/// Mirrors the HTML form: `length`, `case`, and `symbols`/`words` checkboxes.
#[utoipa::path(
    get,
    path = "/generate",
    tag = "Generator",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request or no possible password", body = PasswordGenerationResponse),
        (status = 503, description = "Word list unavailable", body = PasswordGenerationResponse),
        (status = 500, description = "Random source failure", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_from_query(
    state: web::Data<AppState>,
    query: web::Query<GenerateQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = match query.into_inner().into_request(state.default_length) {
        Ok(request) => request,
        Err(message) => {
            return Ok(HttpResponse::BadRequest().json(PasswordGenerationResponse::rejected(message)));
        }
    };

    respond_with_password(state, request).await
}

/// Generate a password
///
/// Generates a password from a JSON body; missing fields use defaults.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request or no possible password", body = PasswordGenerationResponse),
        (status = 503, description = "Word list unavailable", body = PasswordGenerationResponse),
        (status = 500, description = "Random source failure", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let request = generation_req.into_inner().into_request(state.default_length);
    respond_with_password(state, request).await
}

/// Last generation error
///
/// Message of the most recent failed generation; cleared by the next attempt.
#[utoipa::path(
    get,
    path = "/generator/last-error",
    tag = "Generator",
    responses(
        (status = 200, description = "Last error message, if any", body = LastErrorResponse)
    )
)]
pub async fn last_error(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(LastErrorResponse {
        error: state.generator.last_error(),
    })
}

async fn respond_with_password(
    state: web::Data<AppState>,
    request: GenerationRequest,
) -> Result<HttpResponse, actix_web::Error> {
    debug!(
        "Generating password: length={} case={} symbols={} words={}",
        request.length, request.case_policy, request.include_symbols, request.include_words
    );

    // First word-mode request may read the word list from disk
    let generator = Arc::clone(&state.generator);
    let outcome = web::block(move || generator.generate_password(&request)).await?;

    Ok(match outcome {
        Ok(password) => HttpResponse::Ok().json(PasswordGenerationResponse::generated(password)),
        Err(e) => HttpResponse::build(status_for(e.kind())).json(PasswordGenerationResponse::failed(&e)),
    })
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidLength | ErrorKind::EmptyPool | ErrorKind::NoCombination => StatusCode::BAD_REQUEST,
        ErrorKind::DictionaryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::RandomSourceFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use crate::dictionary::DictionaryLoader;
    use crate::generators::{PasswordEngine, PasswordGenerator};
    use actix_web::{test, App};
    use std::io::Write;

    fn state_with_word_list(path: std::path::PathBuf) -> web::Data<AppState> {
        let generator = PasswordGenerator::new(PasswordEngine::default(), DictionaryLoader::from_path(path));
        web::Data::new(AppState {
            generator: Arc::new(generator),
            default_length: 16,
        })
    }

    #[actix_web::test]
    async fn test_query_generation() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(dir.path().join("words.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate?length=10&case=lower").to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        let password = resp.password.unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.bytes().all(|c| c.is_ascii_lowercase()));
    }

    #[actix_web::test]
    async fn test_query_defaults_to_configured_length() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(dir.path().join("words.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate").to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.password.unwrap().len(), 16);
    }

    #[actix_web::test]
    async fn test_invalid_length_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(dir.path().join("words.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate?length=3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.error_kind, Some(ErrorKind::InvalidLength));

        let req = test::TestRequest::get().uri("/generator/last-error").to_request();
        let last: LastErrorResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(last.error.as_deref(), Some("Please specify a password length between 8 and 64."));
    }

    #[actix_web::test]
    async fn test_unparsable_query_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(dir.path().join("words.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate?length=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_kind, None);
    }

    #[actix_web::test]
    async fn test_json_word_mode_with_symbols() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"harbor": 1, "meadow": 1, "kite": 1, "sun": 1}"#).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(file.path().to_path_buf()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(serde_json::json!({"length": 12, "case": "uppercase", "include_symbols": true, "include_words": true}))
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        let password = resp.password.unwrap();
        let bytes = password.as_bytes();
        assert_eq!(bytes.len(), 12);
        for pos in [0, 6, 11] {
            assert!(crate::generators::engine::SYMBOLS.contains(&bytes[pos]), "{}", password);
        }
    }

    #[actix_web::test]
    async fn test_missing_word_list_is_service_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state_with_word_list(dir.path().join("words.json")))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/generate?length=12&words=on").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert_eq!(body.error_kind, Some(ErrorKind::DictionaryUnavailable));
    }
}
