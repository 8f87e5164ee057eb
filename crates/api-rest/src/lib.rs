//! # API REST
//!
//! REST API for tutorial records.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - Mapping of core errors to status codes and JSON error bodies
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, request tracing)
//!
//! Uses `api-shared` for wire types and `tutorials-core` for data access.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use api_shared::{
    CreateTutorialReq, DeleteAllRes, HealthRes, MessageRes, TutorialRes, UpdateTutorialReq,
};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tutorials_core::TutorialService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Holds the tutorial service, whose store handle is opened once at startup.
#[derive(Clone)]
pub struct AppState {
    pub service: TutorialService,
}

impl AppState {
    pub fn new(service: TutorialService) -> Self {
        Self { service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::welcome,
        handlers::health,
        handlers::create_tutorial,
        handlers::list_tutorials,
        handlers::list_published_tutorials,
        handlers::get_tutorial,
        handlers::update_tutorial,
        handlers::delete_tutorial,
        handlers::delete_all_tutorials,
    ),
    components(schemas(
        HealthRes,
        MessageRes,
        CreateTutorialReq,
        UpdateTutorialReq,
        TutorialRes,
        DeleteAllRes,
    ))
)]
pub struct ApiDoc;

/// Builds the complete REST application.
///
/// Unknown paths and unsupported methods answer with the same `{"message"}` body as every
/// other error.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route(
            "/api/tutorials",
            get(handlers::list_tutorials)
                .post(handlers::create_tutorial)
                .delete(handlers::delete_all_tutorials),
        )
        .route(
            "/api/tutorials/published",
            get(handlers::list_published_tutorials),
        )
        .route(
            "/api/tutorials/:id",
            get(handlers::get_tutorial)
                .put(handlers::update_tutorial)
                .delete(handlers::delete_tutorial),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy: a single allowed origin when configured, otherwise permissive.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn cors_layer(
    allowed_origin: Option<&str>,
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    match allowed_origin {
        Some(origin) => Ok(CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([CONTENT_TYPE])),
        None => Ok(CorsLayer::permissive()),
    }
}
