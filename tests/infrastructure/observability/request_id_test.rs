use axum::http::{HeaderMap, HeaderValue};

use diktat::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_id_when_extracting_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc-123"));

    assert_eq!(RequestId::from_headers(&headers), RequestId("abc-123".to_string()));
}

#[test]
fn given_no_incoming_id_when_extracting_then_generates_uuid() {
    let id = RequestId::from_headers(&HeaderMap::new());

    assert!(uuid::Uuid::parse_str(&id.0).is_ok());
}

#[test]
fn given_empty_incoming_id_when_extracting_then_generates_uuid() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(""));

    let id = RequestId::from_headers(&headers);

    assert!(!id.0.is_empty());
}
