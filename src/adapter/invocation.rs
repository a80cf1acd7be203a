//! The serverless-function shape: structured event in, envelope out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AdapterError, RequestAdapter, json_type_name, sequence_from_object};
use crate::analyzer::{AnalysisResult, Sequence};
use crate::consts::DEFAULT_SEQUENCE;

/// What a function-invocation caller gets back. The body stays structured —
/// the hosting runtime owns serialization, not us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: AnalysisResult,
}

/// Adapter for direct invocation: the payload is the event object itself,
/// no HTTP framing anywhere.
pub struct InvocationAdapter;

impl RequestAdapter for InvocationAdapter {
    type Payload = Value;
    type Reply = Envelope;

    /// A `null` event is treated like an empty one (default sequence), the
    /// same leniency a missing payload gets. Anything that is not an object
    /// is malformed.
    fn extract(&self, payload: Value) -> Result<Sequence, AdapterError> {
        match payload {
            Value::Null => Ok(Sequence::from(DEFAULT_SEQUENCE)),
            Value::Object(ref map) => sequence_from_object(map),
            ref other => Err(AdapterError::MalformedRequest(format!(
                "event must be a JSON object, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Analysis cannot fail, so the status is always 200.
    fn wrap(&self, result: AnalysisResult) -> Envelope {
        Envelope {
            status_code: 200,
            body: result,
        }
    }
}
