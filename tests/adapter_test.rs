use serde_json::json;

use basecount::adapter::invocation::InvocationAdapter;
use basecount::adapter::{AdapterError, RequestAdapter};
use basecount::analyzer::analyze;

#[test]
fn empty_event_equals_explicit_default() {
    let from_empty = InvocationAdapter.extract(json!({})).unwrap();
    let from_explicit = InvocationAdapter
        .extract(json!({"sequence": "ACGT"}))
        .unwrap();
    assert_eq!(from_empty, from_explicit);

    let result = analyze(&from_empty);
    assert_eq!(result.sequence_length, 4);
    assert_eq!(result.nucleotide_counts.a, 1);
    assert_eq!(result.nucleotide_counts.c, 1);
    assert_eq!(result.nucleotide_counts.g, 1);
    assert_eq!(result.nucleotide_counts.t, 1);
}

#[test]
fn handle_wraps_analysis_in_a_200_envelope() {
    let envelope = InvocationAdapter
        .handle(json!({"sequence": "ACGTACGT"}))
        .unwrap();

    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.body.sequence_length, 8);
    assert_eq!(envelope.body.nucleotide_counts.g, 2);
}

#[test]
fn envelope_json_shape_matches_the_wire_contract() {
    let envelope = InvocationAdapter.handle(json!({})).unwrap();
    let value = serde_json::to_value(&envelope).unwrap();

    assert_eq!(value["statusCode"], 200);
    assert_eq!(value["body"]["sequence_length"], 4);
    assert_eq!(value["body"]["nucleotide_counts"]["A"], 1);
    assert_eq!(value["body"]["nucleotide_counts"]["T"], 1);
}

#[test]
fn non_string_sequence_is_rejected_not_coerced() {
    let err = InvocationAdapter
        .handle(json!({"sequence": ["A", "C"]}))
        .unwrap_err();
    assert!(matches!(err, AdapterError::UnsupportedValue("an array")));
}

#[test]
fn non_object_event_is_rejected() {
    let err = InvocationAdapter.handle(json!("ACGT")).unwrap_err();
    assert!(matches!(err, AdapterError::MalformedRequest(_)));
    assert!(err.to_string().contains("JSON object"));
}

#[test]
fn handlers_are_stateless_across_calls() {
    let first = InvocationAdapter.handle(json!({"sequence": "AAAA"})).unwrap();
    let _ = InvocationAdapter.handle(json!({"sequence": "CCCC"})).unwrap();
    let third = InvocationAdapter.handle(json!({"sequence": "AAAA"})).unwrap();
    assert_eq!(first, third);
}
