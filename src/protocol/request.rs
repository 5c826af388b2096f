//! Request definitions
//!
//! Represents requests from clients.

use serde::{Deserialize, Serialize};

/// A decoded request
///
/// Every field is optional on the wire; the validator decides which ones a
/// given method needs. Fields are read through accessors so a request cannot
/// change after it has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, alias = "Method", skip_serializing_if = "Option::is_none")]
    method: Option<String>,

    #[serde(default, alias = "Path", skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(default, alias = "Date", skip_serializing_if = "Option::is_none")]
    date: Option<String>,

    #[serde(default, alias = "Body", skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl Request {
    /// Start building a request (client side)
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Raw method string as sent by the client
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Resource path
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Unix timestamp string
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Optional body, itself usually a JSON document
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

/// Builder for Request
#[derive(Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.request.path = Some(path.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.request.date = Some(date.into());
        self
    }

    /// Set the date to the current Unix time
    pub fn date_now(self) -> Self {
        let now = super::validator::unix_now();
        self.date(now.to_string())
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
