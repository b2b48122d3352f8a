//! Entity CRUD endpoints: /entities, /entity, /entity/:id

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use georeg_core::Entity;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;

/// List all entities
///
/// GET /entities
///
/// Returns the full store snapshot as an id → entity mapping, in
/// insertion order.
pub async fn list_all(State(state): State<Arc<AppState>>) -> Json<IndexMap<String, Entity>> {
    let registry = state.registry.read();
    tracing::debug!(entity_count = registry.len(), "listing all entities");
    Json(registry.list_all().clone())
}

/// Get a single entity by id
///
/// GET /entity/:id
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Entity>> {
    let registry = state.registry.read();
    let entity = registry.get(&id)?;
    Ok(Json(entity.clone()))
}

/// Create entity response
#[derive(Serialize)]
pub struct CreateResponse {
    /// Entity identifier
    pub id: String,
}

/// Register a new entity
///
/// POST /entity
///
/// Request body: a JSON object with a string `id` plus numeric
/// `latitude`, `longitude`, and `altitude` (radians for the first two);
/// any other fields are stored uninterpreted.
///
/// Returns 201 Created with a Location header, 409 Conflict if the id
/// already exists, 400 for a missing or non-numeric required field.
pub async fn create(State(state): State<Arc<AppState>>, request: Request) -> Result<impl IntoResponse> {
    let mut fields = read_object_body(&state, request).await?;

    let id = match fields.get("id").and_then(JsonValue::as_str) {
        Some(id) => id.to_string(),
        None => {
            tracing::warn!("create request without a string id field");
            return Err(ServerError::bad_request("must contain id field as a string"));
        }
    };
    fields.remove("id");

    state.registry.write().create(id.clone(), fields)?;
    tracing::info!(entity_id = %id, "entity created");

    Ok((
        StatusCode::CREATED,
        [("location", format!("/entity/{id}"))],
        Json(CreateResponse { id }),
    ))
}

/// Merge fields into an existing entity
///
/// POST /entity/:id
///
/// Only the fields named in the body change; everything else on the
/// entity is left untouched. Returns the updated entity.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Json<Entity>> {
    let fields = read_object_body(&state, request).await?;

    let mut registry = state.registry.write();
    registry.update(&id, fields)?;
    tracing::info!(entity_id = %id, "entity updated");

    let entity = registry.get(&id)?;
    Ok(Json(entity.clone()))
}

/// Delete an entity
///
/// DELETE /entity/:id
///
/// Returns 204 No Content on success, 404 for an unknown id.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.registry.write().delete(&id)?;
    tracing::info!(entity_id = %id, "entity deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Read and parse a request body as a JSON object.
async fn read_object_body(state: &AppState, request: Request) -> Result<Map<String, JsonValue>> {
    let body_bytes = axum::body::to_bytes(request.into_body(), state.config.body_limit)
        .await
        .map_err(|e| ServerError::bad_request(format!("Failed to read body: {e}")))?;
    let body: JsonValue = serde_json::from_slice(&body_bytes)?;

    match body {
        JsonValue::Object(map) => Ok(map),
        _ => Err(ServerError::bad_request("request body must be a JSON object")),
    }
}
