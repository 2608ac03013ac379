//! Service catalog route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use crate::cache::CatalogStats;
use crate::error::{AppError, Result};
use crate::pricing::models::ServiceDefinition;
use crate::pricing::requests::UpsertServiceRequest;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/services/:id",
            get(get_service).put(put_service).delete(delete_service),
        )
        .route("/api/cache", delete(clear_cache))
        .route("/api/cache/stats", get(cache_stats))
}

/// Store or replace a service definition
async fn put_service(
    State(state): State<AppState>,
    Path(service_id): Path<u64>,
    payload: std::result::Result<Json<UpsertServiceRequest>, JsonRejection>,
) -> Result<Json<ServiceDefinition>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let stored = state
        .catalog
        .insert(ServiceDefinition {
            service_id,
            name: request.name,
            service: request.service,
            options: request.options,
        })
        .await?;

    Ok(Json((*stored).clone()))
}

async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<u64>,
) -> Result<Json<ServiceDefinition>> {
    let definition = state
        .catalog
        .get(service_id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json((*definition).clone()))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(service_id): Path<u64>,
) -> StatusCode {
    state.catalog.remove(service_id).await;
    StatusCode::NO_CONTENT
}

/// Drop every cached definition
async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.catalog.invalidate_all();
    StatusCode::NO_CONTENT
}

async fn cache_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats().await)
}
