//! Validator Tests
//!
//! Each rule on its own, then combined messages.

use catalogd::protocol::{validate, validate_at, Request, Violation};

const NOW: u64 = 1_700_000_000;

fn request(method: Option<&str>, path: Option<&str>, date: Option<&str>, body: Option<&str>) -> Request {
    let mut builder = Request::builder();
    if let Some(m) = method {
        builder = builder.method(m);
    }
    if let Some(p) = path {
        builder = builder.path(p);
    }
    if let Some(d) = date {
        builder = builder.date(d);
    }
    if let Some(b) = body {
        builder = builder.body(b);
    }
    builder.build()
}

fn message(request: &Request) -> String {
    validate_at(request, NOW).unwrap_err().message()
}

// =============================================================================
// Valid Requests
// =============================================================================

#[test]
fn test_valid_read() {
    let req = request(Some("read"), Some("/api/categories"), Some("1699999999"), None);
    assert!(validate_at(&req, NOW).is_ok());
}

#[test]
fn test_valid_echo_without_path() {
    let req = request(Some("echo"), None, Some("0"), Some("Hello World"));
    assert!(validate_at(&req, NOW).is_ok());
}

#[test]
fn test_valid_update_with_json_body() {
    let req = request(
        Some("update"),
        Some("/api/categories/1"),
        Some("1700000000"),
        Some(r#"{"cid":1,"name":"Drinks"}"#),
    );
    assert!(validate_at(&req, NOW).is_ok());
}

#[test]
fn test_create_body_is_not_json_checked() {
    let req = request(Some("create"), Some("/api/categories"), Some("1"), Some("plain text"));
    assert!(validate_at(&req, NOW).is_ok());
}

#[test]
fn test_validate_uses_current_time() {
    let req = request(Some("read"), Some("/api/categories"), Some("1"), None);
    assert!(validate(&req).is_ok());

    let future = request(Some("read"), Some("/api/categories"), Some("99999999999"), None);
    assert!(validate(&future).unwrap_err().contains(Violation::IllegalDate));
}

// =============================================================================
// Method Rules
// =============================================================================

#[test]
fn test_missing_method() {
    let req = request(None, Some("/api/categories"), Some("1"), None);
    assert_eq!(message(&req), "Missing method");
}

#[test]
fn test_empty_method_counts_as_missing() {
    let req = request(Some(""), Some("/api/categories"), Some("1"), None);
    assert_eq!(message(&req), "Missing method");
}

#[test]
fn test_illegal_method() {
    let req = request(Some("fetch"), Some("/api/categories"), Some("1"), None);
    assert_eq!(message(&req), "Illegal method");
}

#[test]
fn test_method_is_case_sensitive() {
    let req = request(Some("Read"), Some("/api/categories"), Some("1"), None);
    assert_eq!(message(&req), "Illegal method");
}

// =============================================================================
// Path Rules
// =============================================================================

#[test]
fn test_missing_resource() {
    let req = request(Some("read"), None, Some("1"), None);
    assert_eq!(message(&req), "Missing resource");
}

// =============================================================================
// Date Rules
// =============================================================================

#[test]
fn test_missing_date() {
    let req = request(Some("read"), Some("/api/categories"), None, None);
    assert_eq!(message(&req), "Missing date");
}

#[test]
fn test_non_numeric_date() {
    let req = request(Some("read"), Some("/api/categories"), Some("yesterday"), None);
    assert_eq!(message(&req), "Illegal date");
}

#[test]
fn test_negative_date() {
    let req = request(Some("read"), Some("/api/categories"), Some("-5"), None);
    assert_eq!(message(&req), "Illegal date");
}

#[test]
fn test_future_date() {
    let future = (NOW + 1).to_string();
    let req = request(Some("read"), Some("/api/categories"), Some(&future), None);
    assert_eq!(message(&req), "Illegal date");
}

#[test]
fn test_date_equal_to_now_is_legal() {
    let now = NOW.to_string();
    let req = request(Some("read"), Some("/api/categories"), Some(&now), None);
    assert!(validate_at(&req, NOW).is_ok());
}

// =============================================================================
// Body Rules
// =============================================================================

#[test]
fn test_missing_body_for_create_update_echo() {
    for method in ["create", "update", "echo"] {
        let req = request(Some(method), Some("/api/categories/1"), Some("1"), None);
        let err = validate_at(&req, NOW).unwrap_err();
        assert!(err.contains(Violation::MissingBody), "method {}", method);
    }
}

#[test]
fn test_body_optional_for_read_delete() {
    for method in ["read", "delete"] {
        let req = request(Some(method), Some("/api/categories/1"), Some("1"), None);
        assert!(validate_at(&req, NOW).is_ok(), "method {}", method);
    }
}

#[test]
fn test_update_with_illegal_body() {
    let req = request(Some("update"), Some("/api/categories/1"), Some("1"), Some("Hello World"));
    assert_eq!(message(&req), "Illegal body");
}

#[test]
fn test_update_with_unbalanced_json_body() {
    let req = request(Some("update"), Some("/api/categories/1"), Some("1"), Some("{\"name\": }"));
    assert_eq!(message(&req), "Illegal body");
}

#[test]
fn test_update_with_mismatched_brackets() {
    let req = request(Some("update"), Some("/api/categories/1"), Some("1"), Some("[1, 2}"));
    assert_eq!(message(&req), "Illegal body");
}

#[test]
fn test_update_with_array_body_is_legal() {
    let req = request(Some("update"), Some("/api/categories/1"), Some("1"), Some(" [1, 2] "));
    assert!(validate_at(&req, NOW).is_ok());
}

// =============================================================================
// Combined Messages
// =============================================================================

#[test]
fn test_empty_request_reports_everything() {
    let req = request(None, None, None, None);
    assert_eq!(message(&req), "Missing method Missing resource Missing date");
}

#[test]
fn test_several_violations_are_space_joined() {
    let req = request(Some("create"), None, Some("abc"), None);
    let err = validate_at(&req, NOW).unwrap_err();

    assert_eq!(
        err.violations(),
        &[Violation::MissingResource, Violation::IllegalDate, Violation::MissingBody]
    );
    assert_eq!(err.message(), "Missing resource Illegal date Missing body");
    assert_eq!(err.to_string(), err.message());
}

#[test]
fn test_illegal_method_with_missing_date() {
    let req = request(Some("xxxx"), Some("/api/categories"), None, None);
    assert_eq!(message(&req), "Illegal method Missing date");
}
