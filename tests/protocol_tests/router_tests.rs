//! Router Tests

use catalogd::protocol::{route, Method, RoutingError};

#[test]
fn test_collection_path() {
    assert_eq!(route(Method::Read, "/api/categories"), Ok(None));
    assert_eq!(route(Method::Create, "/api/categories"), Ok(None));
}

#[test]
fn test_single_resource_path() {
    assert_eq!(route(Method::Read, "/api/categories/1"), Ok(Some(1)));
    assert_eq!(route(Method::Update, "/api/categories/42"), Ok(Some(42)));
    assert_eq!(route(Method::Delete, "/api/categories/007"), Ok(Some(7)));
}

#[test]
fn test_unknown_paths() {
    for path in [
        "",
        "/",
        "/api",
        "/api/categories/",
        "/api/categoriesx",
        "/api/categories/abc",
        "/api/categories/-1",
        "/api/categories/+1",
        "/api/categories/1/2",
        "/api/categories/1 ",
        "/api/products/1",
        "api/categories",
    ] {
        assert_eq!(
            route(Method::Read, path),
            Err(RoutingError::NoMatch(path.to_string())),
            "path {:?}",
            path
        );
    }
}

#[test]
fn test_id_overflow_does_not_match() {
    let path = "/api/categories/99999999999999999999999";
    assert!(matches!(route(Method::Read, path), Err(RoutingError::NoMatch(_))));
}

#[test]
fn test_create_rejects_id() {
    assert_eq!(
        route(Method::Create, "/api/categories/5"),
        Err(RoutingError::IdNotAllowed(Method::Create))
    );
}

#[test]
fn test_update_and_delete_require_id() {
    assert_eq!(
        route(Method::Update, "/api/categories"),
        Err(RoutingError::IdRequired(Method::Update))
    );
    assert_eq!(
        route(Method::Delete, "/api/categories"),
        Err(RoutingError::IdRequired(Method::Delete))
    );
}

#[test]
fn test_routing_error_messages() {
    assert_eq!(
        RoutingError::IdRequired(Method::Delete).to_string(),
        "Resource id required for delete"
    );
    assert_eq!(
        RoutingError::NoMatch("/x".to_string()).to_string(),
        "Unknown resource: /x"
    );
}
