use axum::Json;
use axum_macros::FromRequest;

use crate::transformations::models::transform_response::TransformFailure;

/// JSON extractor for `POST /transform`; a rejected body still answers with
/// the failed-progress shape.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(TransformFailure))]
pub struct TransformJson<T>(pub T);
