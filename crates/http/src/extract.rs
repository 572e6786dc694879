//! Request extractors with envelope-shaped rejections

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection renders as a 400 `fail` envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
