use super::*;

#[test]
fn decode_response_keeps_data_and_errors_together() {
    let raw = r#"{"data":{"login":"ok"},"errors":[{"message":"quota warning"}]}"#;
    let response: QueryResponse<serde_json::Value> = decode_response(raw).unwrap();
    assert!(response.data.is_some());
    assert_eq!(
        response.errors,
        vec![GraphQlError {
            message: "quota warning".to_owned()
        }]
    );
}

#[test]
fn decode_response_defaults_missing_errors_to_empty() {
    let raw = r#"{"data":{"login":null}}"#;
    let response: QueryResponse<serde_json::Value> = decode_response(raw).unwrap();
    assert!(response.errors.is_empty());
}

#[test]
fn decode_response_accepts_error_only_envelopes() {
    let raw = r#"{"data":null,"errors":[{"message":"bad credentials"},{"message":"account locked"}]}"#;
    let response: QueryResponse<serde_json::Value> = decode_response(raw).unwrap();
    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 2);
}

#[test]
fn decode_response_rejects_non_envelope_bodies() {
    let result: Result<QueryResponse<serde_json::Value>, TransportError> = decode_response("<html>oops</html>");
    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(502), "query request failed: 502");
}
