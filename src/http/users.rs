//! User CRUD handlers.
//!
//! Each handler forwards to exactly one backend call and relays the backend's
//! status code. GET/POST/PUT relay the JSON body, DELETE relays an empty one.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::backend::{BackendResponse, UserId};
use crate::error::GatewayError;
use crate::http::request::request_id;
use crate::http::server::AppState;

/// Path segment that must parse as a [`UserId`].
///
/// Non-integer segments are answered with 404 as if the route did not exist.
fn parse_user_id(raw: &str) -> Result<UserId, Response> {
    raw.parse::<UserId>().map_err(|_| {
        tracing::debug!(segment = %raw, "Non-integer user id");
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Not Found" })),
        )
            .into_response()
    })
}

fn relay(response: BackendResponse) -> Response {
    match response.body {
        Some(body) => (response.status, Json(body)).into_response(),
        None => response.status.into_response(),
    }
}

/// `GET /api/users`
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let response = state.backend.list_users(request_id(&headers)).await?;
    Ok(relay(response))
}

/// `GET /api/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let id = match parse_user_id(&id) {
        Ok(id) => id,
        Err(not_found) => return Ok(not_found),
    };
    let response = state.backend.get_user(&id, request_id(&headers)).await?;
    Ok(relay(response))
}

/// `POST /api/users`
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, GatewayError> {
    let response = state
        .backend
        .create_user(&body, request_id(&headers))
        .await?;
    Ok(relay(response))
}

/// `PUT /api/users/{id}`
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Response, GatewayError> {
    let id = match parse_user_id(&id) {
        Ok(id) => id,
        Err(not_found) => return Ok(not_found),
    };
    let response = state
        .backend
        .update_user(&id, &body, request_id(&headers))
        .await?;
    Ok(relay(response))
}

/// `DELETE /api/users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, GatewayError> {
    let id = match parse_user_id(&id) {
        Ok(id) => id,
        Err(not_found) => return Ok(not_found),
    };
    let response = state.backend.delete_user(&id, request_id(&headers)).await?;
    Ok(relay(response))
}
