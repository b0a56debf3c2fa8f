//! Shared request plumbing for the HTTP backend clients.
//!
//! Every failure (connection error, timeout, non-2xx status, unparsable
//! body) is logged here with the operation name and converted into a
//! [`TransportError`]; nothing else crosses into the handler layer.

use reqwest::RequestBuilder;
use serde_json::Value;

use super::error::TransportError;

/// Send a request and parse the response body as JSON.
pub(super) async fn send_json(
    operation: &'static str,
    request: RequestBuilder,
) -> Result<Value, TransportError> {
    match dispatch(request).await {
        Ok(response) => response
            .json::<Value>()
            .await
            .map_err(|e| log_failure(operation, TransportError::InvalidBody(e.to_string()))),
        Err(err) => Err(log_failure(operation, err)),
    }
}

/// Send a request, discarding any response body.
pub(super) async fn send_no_body(
    operation: &'static str,
    request: RequestBuilder,
) -> Result<(), TransportError> {
    match dispatch(request).await {
        Ok(_) => Ok(()),
        Err(err) => Err(log_failure(operation, err)),
    }
}

async fn dispatch(request: RequestBuilder) -> Result<reqwest::Response, TransportError> {
    let response = request.send().await.map_err(TransportError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status(status.as_u16()));
    }

    Ok(response)
}

fn log_failure(operation: &'static str, err: TransportError) -> TransportError {
    tracing::error!(operation, error = %err, "backend call failed");
    err
}
