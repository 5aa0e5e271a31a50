//! Product route handlers.

use axum::{Json, extract::State, http::StatusCode};

use product_crud_core::{Entity, Product, ProductCreate, ProductId, ProductUpdate};

use crate::error::{AppError, Result};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use crate::validation;

/// List every product in insertion order.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.store().await.products().list_all();
    Json(products)
}

/// Fetch one product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this id.
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProductId>,
) -> Result<Json<Product>> {
    let product = state.store().await.products().get(id);
    product.map(Json).ok_or(AppError::NotFound(Product::KIND))
}

/// Create a product.
///
/// # Errors
///
/// Returns `AppError::Validation` if strict validation rejects the payload.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProductCreate>,
) -> Result<Json<Product>> {
    validation::check(&payload, state.strict_validation())?;

    let product = state.store().await.products_mut().create(payload);
    tracing::info!(product_id = %product.id, name = %product.name, "Product created");
    Ok(Json(product))
}

/// Apply a partial update to a product.
///
/// # Errors
///
/// Returns `AppError::Validation` if strict validation rejects the payload,
/// or `AppError::NotFound` if no product has this id.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProductId>,
    ApiJson(payload): ApiJson<ProductUpdate>,
) -> Result<Json<Product>> {
    validation::check(&payload, state.strict_validation())?;

    let fields = payload.present_fields();
    let product = state.store().await.products_mut().update(id, payload);
    let product = product.ok_or(AppError::NotFound(Product::KIND))?;

    tracing::info!(product_id = %id, ?fields, "Product updated");
    Ok(Json(product))
}

/// Delete a product. Responds 204 with an empty body.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this id.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<ProductId>,
) -> Result<StatusCode> {
    let deleted = state.store().await.products_mut().delete(id);
    if !deleted {
        return Err(AppError::NotFound(Product::KIND));
    }

    tracing::info!(product_id = %id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
