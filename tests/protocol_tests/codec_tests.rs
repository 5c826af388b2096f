//! Codec Tests
//!
//! Tests for request decoding and response encoding.

use catalogd::protocol::{
    decode_request, decode_response, encode_request, encode_response, Request, Response,
    StatusCode,
};
use catalogd::CatalogError;

// =============================================================================
// Request Decoding Tests
// =============================================================================

#[test]
fn test_decode_full_request() {
    let raw = br#"{"method":"update","path":"/api/categories/1","date":"1700000000","body":"{\"name\":\"Drinks\"}"}"#;
    let request = decode_request(raw).unwrap();

    assert_eq!(request.method(), Some("update"));
    assert_eq!(request.path(), Some("/api/categories/1"));
    assert_eq!(request.date(), Some("1700000000"));
    assert_eq!(request.body(), Some(r#"{"name":"Drinks"}"#));
}

#[test]
fn test_decode_missing_fields_are_none() {
    let request = decode_request(b"{}").unwrap();

    assert_eq!(request.method(), None);
    assert_eq!(request.path(), None);
    assert_eq!(request.date(), None);
    assert_eq!(request.body(), None);
}

#[test]
fn test_decode_null_fields_are_none() {
    let request = decode_request(br#"{"method":"read","body":null}"#).unwrap();

    assert_eq!(request.method(), Some("read"));
    assert_eq!(request.body(), None);
}

#[test]
fn test_decode_accepts_pascal_case_fields() {
    let raw = br#"{"Method":"echo","Date":"1","Body":"hi"}"#;
    let request = decode_request(raw).unwrap();

    assert_eq!(request.method(), Some("echo"));
    assert_eq!(request.date(), Some("1"));
    assert_eq!(request.body(), Some("hi"));
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let raw = br#"{"method":"read","path":"/api/categories","date":"1","extra":42}"#;
    let request = decode_request(raw).unwrap();

    assert_eq!(request.method(), Some("read"));
}

#[test]
fn test_decode_malformed_json() {
    let result = decode_request(b"{\"method\": \"read\"");
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[test]
fn test_decode_wrong_shape() {
    assert!(matches!(decode_request(b"[1, 2, 3]"), Err(CatalogError::Decode(_))));
    assert!(matches!(
        decode_request(br#"{"method": 5}"#),
        Err(CatalogError::Decode(_))
    ));
}

#[test]
fn test_decode_null_document() {
    let err = decode_request(b"null").unwrap_err();
    assert!(err.to_string().contains("null"));
}

#[test]
fn test_decode_empty_frame() {
    assert!(matches!(decode_request(b""), Err(CatalogError::Decode(_))));
    assert!(matches!(decode_request(b"  \n"), Err(CatalogError::Decode(_))));
}

#[test]
fn test_decode_invalid_utf8() {
    let err = decode_request(&[b'{', 0xFF, 0xFE, b'}']).unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
    assert!(err.to_string().contains("UTF-8"));
}

// =============================================================================
// Response Encoding Tests
// =============================================================================

#[test]
fn test_status_strings_are_exact() {
    assert_eq!(StatusCode::Ok.as_str(), "1 Ok");
    assert_eq!(StatusCode::Created.as_str(), "2 Created");
    assert_eq!(StatusCode::Updated.as_str(), "3 Updated");
    assert_eq!(StatusCode::BadRequest.as_str(), "4 Bad Request");
    assert_eq!(StatusCode::NotFound.as_str(), "5 Not Found");
    assert_eq!(StatusCode::Error.as_str(), "6 Error");
}

#[test]
fn test_status_string_starts_with_code() {
    for status in StatusCode::ALL {
        assert!(status.as_str().starts_with(&format!("{} ", status.code())));
    }
}

#[test]
fn test_encode_response_with_body() {
    let encoded = encode_response(&Response::ok(Some("hello".to_string()))).unwrap();
    assert_eq!(encoded, br#"{"status":"1 Ok","body":"hello"}"#);
}

#[test]
fn test_encode_response_without_body_omits_field() {
    let encoded = encode_response(&Response::not_found()).unwrap();
    assert_eq!(encoded, br#"{"status":"5 Not Found"}"#);
}

#[test]
fn test_encode_response_escapes_json_body() {
    let encoded = encode_response(&Response::created(r#"{"cid":4,"name":"Seafood"}"#.to_string()))
        .unwrap();
    assert_eq!(
        encoded,
        br#"{"status":"2 Created","body":"{\"cid\":4,\"name\":\"Seafood\"}"}"#
    );
}

#[test]
fn test_response_round_trip() {
    let responses = [
        Response::ok(Some("[]".to_string())),
        Response::updated(),
        Response::bad_request("Missing method Missing date"),
        Response::error("boom"),
    ];

    for response in responses {
        let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();
        assert_eq!(decoded, response);
    }
}

#[test]
fn test_decode_response_rejects_unknown_status() {
    let err = decode_response(br#"{"status":"7 Teapot"}"#).unwrap_err();
    assert!(err.to_string().contains("Unknown response status"));
}

#[test]
fn test_decode_response_empty() {
    assert!(decode_response(b"").is_err());
}

// =============================================================================
// Client-side Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_request_omits_absent_fields() {
    let request = Request::builder().method("echo").date("1").body("hi").build();
    let encoded = encode_request(&request).unwrap();
    assert_eq!(encoded, br#"{"method":"echo","date":"1","body":"hi"}"#);
}

#[test]
fn test_encode_request_decodes_back() {
    let request = Request::builder()
        .method("create")
        .path("/api/categories")
        .date("1700000000")
        .body(r#"{"name":"Seafood"}"#)
        .build();

    let decoded = decode_request(&encode_request(&request).unwrap()).unwrap();
    assert_eq!(decoded, request);
}
