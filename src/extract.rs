//! Request extractors that report failures with the API's JSON error envelope.

use axum::extract::FromRequest;

use crate::Error;

/// Like [axum::Json], but a body that is not valid JSON for `T` is rejected
/// with [Error::InvalidRequestBody] instead of a plain text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);
