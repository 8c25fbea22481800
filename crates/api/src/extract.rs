//! Request extractors that report rejections in the API error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body. Malformed or non-object bodies become a 400
/// `BAD_REQUEST` instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
