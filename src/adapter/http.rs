//! The HTTP shape: raw JSON body in, JSON response out.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use super::{AdapterError, RequestAdapter, json_type_name, sequence_from_object};
use crate::analyzer::{AnalysisResult, Sequence};

/// Adapter for HTTP callers: the payload is the raw request body, before
/// any JSON parsing. Parsing is ours to do and ours to fail.
pub struct HttpAdapter;

impl RequestAdapter for HttpAdapter {
    type Payload = String;
    type Reply = Response;

    fn extract(&self, raw_body: String) -> Result<Sequence, AdapterError> {
        let value: Value = serde_json::from_str(&raw_body)
            .map_err(|e| AdapterError::MalformedRequest(format!("invalid JSON body: {e}")))?;
        match value {
            Value::Object(ref map) => sequence_from_object(map),
            ref other => Err(AdapterError::MalformedRequest(format!(
                "body must be a JSON object, got {}",
                json_type_name(other)
            ))),
        }
    }

    fn wrap(&self, result: AnalysisResult) -> Response {
        (StatusCode::OK, Json(result)).into_response()
    }
}

/// Both error cases are the client's fault, so both map to 400. A malformed
/// body never produces a 200 with made-up counts.
impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
