use axum::extract::{FromRequest, FromRequestParts};

use super::app_error::AppError;

/// `axum::Json` whose rejections render as `{"error": ...}` with status 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub(crate) struct AppJson<T>(pub(crate) T);

/// `axum::extract::Path` whose rejections render as `{"error": ...}` with status 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub(crate) struct AppPath<T>(pub(crate) T);
