//! Dispatcher Module
//!
//! Turns validated requests into store operations and responses.
//!
//! ## Responsibilities
//! - Run the decode → validate → route → dispatch pipeline for one frame
//! - Map `(method, id)` pairs onto [`CategoryStore`] calls
//! - Map every failure onto a response; nothing here panics or escapes
//!
//! ## Dispatch Table
//!
//! | method | id      | operation        | success              | failure       |
//! |--------|---------|------------------|----------------------|---------------|
//! | echo   | n/a     | return body      | `1 Ok` + body        |               |
//! | read   | absent  | list             | `1 Ok` + array       |               |
//! | read   | present | get              | `1 Ok` + category    | `5 Not Found` |
//! | create | absent  | insert, new id   | `2 Created` + object | `4 Bad Request` |
//! | update | present | rename           | `3 Updated`          | `5 Not Found` |
//! | delete | present | remove           | `1 Ok`               | `5 Not Found` |

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::protocol::{
    decode_request, route, validate, Method, Request, Response,
};
use crate::store::{CategoryId, CategoryStore, MemoryStore, NewCategory};

/// Executes requests against a category store
///
/// Holds no state of its own; the store serializes concurrent mutations, so
/// one dispatcher is shared by every connection.
pub struct Dispatcher {
    store: Arc<dyn CategoryStore>,
}

impl Dispatcher {
    /// Create a dispatcher over an existing store
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// Create a dispatcher over a fresh in-memory store
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_categories {
            MemoryStore::seeded()
        } else {
            MemoryStore::new()
        };
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &dyn CategoryStore {
        self.store.as_ref()
    }

    /// Handle one raw request frame
    pub fn handle_frame(&self, frame: &[u8]) -> Response {
        match decode_request(frame) {
            Ok(request) => self.handle_request(&request),
            Err(e) => {
                tracing::debug!("Rejecting undecodable request: {}", e);
                error_response(&e)
            }
        }
    }

    /// Validate and dispatch a decoded request
    pub fn handle_request(&self, request: &Request) -> Response {
        let result = validate(request)
            .map_err(CatalogError::from)
            .and_then(|()| self.dispatch(request));

        match result {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Request failed: {}", e);
                error_response(&e)
            }
        }
    }

    /// Execute a request that has already passed validation
    ///
    /// Routing failures come back as `CatalogError::Routing`; not-found is a
    /// regular response.
    pub fn dispatch(&self, request: &Request) -> Result<Response> {
        let method = request
            .method()
            .and_then(|m| m.parse::<Method>().ok())
            .ok_or_else(|| CatalogError::Protocol("request has no legal method".to_string()))?;

        if method == Method::Echo {
            return Ok(Response::ok(request.body().map(str::to_string)));
        }

        let id = route(method, request.path().unwrap_or_default())?;
        tracing::debug!(%method, ?id, "Dispatching request");

        match (method, id) {
            (Method::Read, None) => self.list(),
            (Method::Read, Some(cid)) => self.read(cid),
            (Method::Create, None) => self.create(request.body()),
            (Method::Update, Some(cid)) => self.update(cid, request.body()),
            (Method::Delete, Some(cid)) => Ok(self.delete(cid)),
            _ => Ok(Response::bad_request(format!(
                "Unsupported request: {} {}",
                method,
                request.path().unwrap_or_default()
            ))),
        }
    }

    fn list(&self) -> Result<Response> {
        let categories = self.store.list();
        Ok(Response::ok(Some(to_json(&categories)?)))
    }

    fn read(&self, cid: CategoryId) -> Result<Response> {
        match self.store.get(cid) {
            Some(category) => Ok(Response::ok(Some(to_json(&category)?))),
            None => Ok(Response::not_found()),
        }
    }

    fn create(&self, body: Option<&str>) -> Result<Response> {
        let input = match parse_category(body) {
            Ok(input) => input,
            Err(response) => return Ok(response),
        };

        let created = self.store.create(input);
        tracing::debug!(cid = created.cid, "Created category");
        Ok(Response::created(to_json(&created)?))
    }

    fn update(&self, cid: CategoryId, body: Option<&str>) -> Result<Response> {
        let input = match parse_category(body) {
            Ok(input) => input,
            Err(response) => return Ok(response),
        };

        if self.store.update(cid, input) {
            Ok(Response::updated())
        } else {
            Ok(Response::not_found())
        }
    }

    fn delete(&self, cid: CategoryId) -> Response {
        if self.store.delete(cid) {
            Response::ok(None)
        } else {
            Response::not_found()
        }
    }
}

/// Map a pipeline failure onto the response the client receives
pub fn error_response(error: &CatalogError) -> Response {
    match error {
        CatalogError::Validation(e) => Response::bad_request(e.message()),
        CatalogError::Routing(e) => Response::bad_request(e.to_string()),
        other => Response::error(other.to_string()),
    }
}

fn parse_category(body: Option<&str>) -> std::result::Result<NewCategory, Response> {
    let body = body.ok_or_else(|| Response::bad_request("Missing body"))?;
    serde_json::from_str(body).map_err(|e| Response::bad_request(format!("Illegal body: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CatalogError::Serialization(e.to_string()))
}
