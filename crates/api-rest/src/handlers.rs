//! REST handlers for tutorial records.
//!
//! Each handler is a direct pass-through to [`TutorialService`]; failures become an
//! [`ApiError`] and are mapped to a status code there.

use api_shared::{
    CreateTutorialReq, DeleteAllRes, HealthRes, HealthService, ListTutorialsQuery, MessageRes,
    TutorialRes, UpdateTutorialReq,
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use tutorials_core::{Tutorial, TutorialPatch};

use crate::{error::ApiError, AppState};

type ApiResult<T> = Result<T, ApiError>;

/// JSON 404 for paths no route matches.
pub async fn route_not_found() -> (StatusCode, Json<MessageRes>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageRes::new("Route not found")),
    )
}

/// JSON 405 for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<MessageRes>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageRes::new("Method not allowed")),
    )
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn welcome() -> Json<MessageRes> {
    Json(MessageRes::new("Welcome to the tutorials application."))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthRes),
        (status = 503, description = "Store is unreachable", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Round-trips to the backing store so load balancers stop routing here when the store is down.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthRes>) {
    match state.service.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthService::check_health())),
        Err(e) => {
            tracing::warn!("Health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthService::store_unavailable()),
            )
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/tutorials",
    request_body = CreateTutorialReq,
    responses(
        (status = 201, description = "Tutorial created", body = TutorialRes),
        (status = 400, description = "Missing or blank title", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Create a new tutorial
///
/// `published` defaults to `false` when omitted.
#[axum::debug_handler]
pub async fn create_tutorial(
    State(state): State<AppState>,
    req: Result<Json<CreateTutorialReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TutorialRes>)> {
    let Json(req) = req?;
    let tutorial = state
        .service
        .create(req.title, req.description, req.published)
        .await?;
    Ok((StatusCode::CREATED, Json(to_res(tutorial))))
}

#[utoipa::path(
    get,
    path = "/api/tutorials",
    params(ListTutorialsQuery),
    responses(
        (status = 200, description = "List of tutorials", body = [TutorialRes]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// List tutorials
///
/// With `?title=`, only tutorials whose title contains the value (ignoring case) are returned.
#[axum::debug_handler]
pub async fn list_tutorials(
    State(state): State<AppState>,
    query: Result<Query<ListTutorialsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<TutorialRes>>> {
    let Query(query) = query?;
    let tutorials = state.service.list(query.title.as_deref()).await?;
    Ok(Json(to_res_list(tutorials)))
}

#[utoipa::path(
    get,
    path = "/api/tutorials/published",
    responses(
        (status = 200, description = "Published tutorials", body = [TutorialRes]),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn list_published_tutorials(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TutorialRes>>> {
    let tutorials = state.service.list_published().await?;
    Ok(Json(to_res_list(tutorials)))
}

#[utoipa::path(
    get,
    path = "/api/tutorials/{id}",
    params(("id" = String, Path, description = "Tutorial id")),
    responses(
        (status = 200, description = "Tutorial", body = TutorialRes),
        (status = 404, description = "No tutorial with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn get_tutorial(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<TutorialRes>> {
    let Path(id) = id?;
    let tutorial = state.service.get(&id).await?;
    Ok(Json(to_res(tutorial)))
}

#[utoipa::path(
    put,
    path = "/api/tutorials/{id}",
    params(("id" = String, Path, description = "Tutorial id")),
    request_body = UpdateTutorialReq,
    responses(
        (status = 200, description = "Updated tutorial", body = TutorialRes),
        (status = 400, description = "Empty update", body = MessageRes),
        (status = 404, description = "No tutorial with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
/// Partially update a tutorial
///
/// Fields left out of the body keep their stored values.
#[axum::debug_handler]
pub async fn update_tutorial(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    req: Result<Json<UpdateTutorialReq>, JsonRejection>,
) -> ApiResult<Json<TutorialRes>> {
    let Path(id) = id?;
    let Json(req) = req?;
    let patch = TutorialPatch {
        title: req.title,
        description: req.description,
        published: req.published,
    };
    let tutorial = state.service.update(&id, patch).await?;
    Ok(Json(to_res(tutorial)))
}

#[utoipa::path(
    delete,
    path = "/api/tutorials/{id}",
    params(("id" = String, Path, description = "Tutorial id")),
    responses(
        (status = 200, description = "Tutorial deleted", body = MessageRes),
        (status = 404, description = "No tutorial with this id", body = MessageRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_tutorial(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageRes>> {
    let Path(id) = id?;
    state.service.delete(&id).await?;
    Ok(Json(MessageRes::new("Tutorial was deleted successfully!")))
}

#[utoipa::path(
    delete,
    path = "/api/tutorials",
    responses(
        (status = 200, description = "All tutorials deleted", body = DeleteAllRes),
        (status = 500, description = "Internal server error", body = MessageRes)
    )
)]
#[axum::debug_handler]
pub async fn delete_all_tutorials(State(state): State<AppState>) -> ApiResult<Json<DeleteAllRes>> {
    let deleted_count = state.service.delete_all().await?;
    Ok(Json(DeleteAllRes {
        message: format!("{deleted_count} Tutorials were deleted successfully!"),
        deleted_count,
    }))
}

// Helper functions
fn to_res(tutorial: Tutorial) -> TutorialRes {
    TutorialRes {
        id: tutorial.id.to_string(),
        title: tutorial.title,
        description: tutorial.description,
        published: tutorial.published,
        created_at: tutorial.created_at.to_rfc3339(),
        updated_at: tutorial.updated_at.to_rfc3339(),
    }
}

fn to_res_list(tutorials: Vec<Tutorial>) -> Vec<TutorialRes> {
    tutorials.into_iter().map(to_res).collect()
}
