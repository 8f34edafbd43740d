//! Response classification.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::context::Context;
use crate::error::{ApiError, CcError, Result};

/// Turn a response into either a decoded `T` or an [`ApiError`].
///
/// Only `200 OK` counts as success; the Cloud Controller uses no other 2xx
/// status for reads. The body is read to the end before anything is decoded,
/// and the response is dropped on every path.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: Response,
    context: &Context,
    operation: &'static str,
    decoding: &'static str,
) -> Result<T> {
    let status = response.status();
    let body = context.run(operation, response.bytes()).await?;

    if status != StatusCode::OK {
        let error = match body {
            Ok(bytes) => ApiError::from_body(status.as_u16(), &bytes),
            Err(e) => ApiError {
                status_code: status.as_u16(),
                description: e.to_string(),
                ..Default::default()
            },
        };
        tracing::debug!(
            status = error.status_code,
            error_code = %error.error_code,
            "{operation} returned an error response"
        );
        return Err(error.into());
    }

    let body = body.map_err(|source| CcError::Body { operation, source })?;
    serde_json::from_slice(&body).map_err(CcError::decode(decoding))
}
