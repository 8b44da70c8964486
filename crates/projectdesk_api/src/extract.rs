//! Request extractors whose rejections use the JSON envelope.

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::Json;

/// JSON body; malformed or incomplete bodies become `400` envelopes.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string; undecodable parameters become `400` envelopes.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
