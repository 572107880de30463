//! Extractors whose rejections are domain errors, so malformed input produces the same
//! JSON error body as every other validation failure.

use crate::errors::Error;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
