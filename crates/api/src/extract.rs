//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Json` and `Path` extractors answer bad input with 400/415
//! and a plain-text body. These wrappers route every rejection through
//! `AppError` so clients always get a 422 with a JSON `detail` list.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(ApiJson(payload): ApiJson<ProductCreate>) -> Result<Json<Product>> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor.
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
