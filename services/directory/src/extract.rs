use axum::extract::{FromRequest, FromRequestParts};

use crate::error::DirectoryError;

/// `axum::Json` whose rejections (bad syntax, wrong shape, missing content type)
/// all surface as [`DirectoryError::MalformedBody`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(DirectoryError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` whose rejections surface as [`DirectoryError::InvalidId`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(DirectoryError))]
pub struct IdPath<T>(pub T);
