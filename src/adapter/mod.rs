//! The request-adapter contract and the pieces both variants share.
//!
//! An adapter owns one invocation shape: it pulls a [`Sequence`] out of that
//! shape's raw payload and wraps the analysis result back into the reply the
//! caller expects. The analysis in the middle is always the same.

pub mod http;
pub mod invocation;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::analyzer::{AnalysisResult, Sequence, analyze};
use crate::consts::{DEFAULT_SEQUENCE, SEQUENCE_KEY};

/// How a request can be unusable. Nothing here is transient, so there is
/// nothing to retry — every error goes straight back to the caller.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The raw payload could not be read as a JSON object at all.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// The `"sequence"` key was present but held something other than a
    /// string. We fail fast instead of guessing at a coercion.
    #[error("unsupported \"sequence\" value: expected a string, got {0}")]
    UnsupportedValue(&'static str),
}

/// One invocation shape. `extract` and `wrap` are the variant-specific ends;
/// the provided `handle` chains them around the shared analyzer.
pub trait RequestAdapter {
    /// The raw input this shape receives.
    type Payload;
    /// The reply this shape's caller expects.
    type Reply;

    fn extract(&self, payload: Self::Payload) -> Result<Sequence, AdapterError>;

    fn wrap(&self, result: AnalysisResult) -> Self::Reply;

    fn handle(&self, payload: Self::Payload) -> Result<Self::Reply, AdapterError> {
        let sequence = self.extract(payload)?;
        Ok(self.wrap(analyze(&sequence)))
    }
}

/// The lookup-with-default both adapters agreed on: a missing `"sequence"`
/// key is not an error, it means [`DEFAULT_SEQUENCE`].
pub(crate) fn sequence_from_object(object: &Map<String, Value>) -> Result<Sequence, AdapterError> {
    match object.get(SEQUENCE_KEY) {
        None => Ok(Sequence::from(DEFAULT_SEQUENCE)),
        Some(Value::String(raw)) => Ok(Sequence::from(raw.as_str())),
        Some(other) => Err(AdapterError::UnsupportedValue(json_type_name(other))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
