//! User route handlers.
//!
//! Passwords pass through untouched and are never logged.

use axum::{Json, extract::State};

use product_crud_core::{Entity, User, UserCreate, UserId, UserUpdate};

use super::MessageResponse;
use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::validation;

/// List every user in insertion order.
pub async fn index(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.store().await.users().list_all();
    Json(users)
}

/// Fetch one user.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no user has this id.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<User>> {
    let user = state.store().await.users().get(id);
    user.map(Json).ok_or(AppError::NotFound(User::KIND))
}

/// Create a user.
///
/// # Errors
///
/// Returns `AppError::Validation` if strict validation rejects the payload.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserCreate>,
) -> Result<Json<User>> {
    validation::check(&payload, state.strict_validation())?;

    let user = state.store().await.users_mut().create(payload);
    tracing::info!(user_id = %user.id, "User created");
    Ok(Json(user))
}

/// Apply a partial update to a user.
///
/// # Errors
///
/// Returns `AppError::Validation` if strict validation rejects the payload,
/// or `AppError::NotFound` if no user has this id.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<UserId>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<User>> {
    validation::check(&payload, state.strict_validation())?;

    let fields = payload.present_fields();
    let user = state.store().await.users_mut().update(id, payload);
    let user = user.ok_or(AppError::NotFound(User::KIND))?;

    tracing::info!(user_id = %id, ?fields, "User updated");
    Ok(Json(user))
}

/// Delete a user. Unlike products, this answers 200 with a message body.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no user has this id.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<UserId>,
) -> Result<Json<MessageResponse>> {
    let deleted = state.store().await.users_mut().delete(id);
    if !deleted {
        return Err(AppError::NotFound(User::KIND));
    }

    tracing::info!(user_id = %id, "User deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}
