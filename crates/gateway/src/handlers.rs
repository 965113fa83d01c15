//! Resource handlers, generic over the record type

use crate::error::GatewayError;
use crate::routes::GatewayState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rms_core::domain::{RecordKey, Resource, ResourceKey};
use rms_sdk::StatsResponse;
use serde_json::{json, Map, Value};

type HandlerResult = Result<(StatusCode, Json<Value>), GatewayError>;

/// `{ "<name>": value }`
fn wrap(name: &str, value: impl serde::Serialize) -> Result<Json<Value>, GatewayError> {
    let value = serde_json::to_value(value).map_err(|e| GatewayError::Internal(e.to_string()))?;
    let mut body = Map::new();
    body.insert(name.to_string(), value);
    Ok(Json(Value::Object(body)))
}

fn path_key<R: Resource>(id: String) -> Result<R::Key, GatewayError> {
    Ok(R::Key::from_record_key(RecordKey::Text(id))?)
}

fn body<R: Resource>(payload: Result<Json<R>, JsonRejection>) -> Result<R, GatewayError> {
    payload
        .map(|Json(record)| record)
        .map_err(|rejection| GatewayError::BadRequest(rejection.body_text()))
}

/// GET /<resource>
pub async fn list<R: Resource>(State(state): State<GatewayState>) -> HandlerResult {
    let records: Vec<R> = state.client.list().await?;
    Ok((StatusCode::OK, wrap(R::descriptor().wire.plural, records)?))
}

/// GET /<resource>/:id
pub async fn get<R: Resource>(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let key = path_key::<R>(id)?;
    let record: R = state.client.get::<R>(key).await?;
    Ok((StatusCode::OK, wrap(R::descriptor().wire.singular, record)?))
}

/// POST /<resource>
pub async fn create<R: Resource>(
    State(state): State<GatewayState>,
    payload: Result<Json<R>, JsonRejection>,
) -> HandlerResult {
    let record = body(payload)?;
    let created = state.client.create(record).await?;
    Ok((StatusCode::CREATED, wrap(R::descriptor().wire.singular, created)?))
}

/// PUT /<resource>/:id
///
/// The path id wins over any key in the body.
pub async fn update<R: Resource>(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    payload: Result<Json<R>, JsonRejection>,
) -> HandlerResult {
    let key = path_key::<R>(id)?;
    let mut partial = body(payload)?;
    partial.set_key(key);

    let updated = state.client.update(partial).await?;
    Ok((StatusCode::OK, wrap(R::descriptor().wire.singular, updated)?))
}

/// DELETE /<resource>/:id
pub async fn delete<R: Resource>(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> HandlerResult {
    let entity = R::descriptor();
    let key = path_key::<R>(id)?;

    if !state.client.delete::<R>(key).await? {
        return Err(GatewayError::Internal(format!(
            "{} could not be deleted",
            entity.name
        )));
    }

    Ok((
        StatusCode::OK,
        Json(json!({ "message": format!("{} deleted successfully", entity.name) })),
    ))
}

/// GET /status
pub async fn status(State(state): State<GatewayState>) -> Result<Json<StatsResponse>, GatewayError> {
    Ok(Json(state.client.stats().await?))
}
