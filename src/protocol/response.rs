//! Response definitions
//!
//! Represents responses to clients.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum StatusCode {
    Ok = 1,
    Created = 2,
    Updated = 3,
    BadRequest = 4,
    NotFound = 5,
    Error = 6,
}

impl StatusCode {
    pub const ALL: [StatusCode; 6] = [
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::Updated,
        StatusCode::BadRequest,
        StatusCode::NotFound,
        StatusCode::Error,
    ];

    /// Numeric code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// The exact status string sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::Ok => "1 Ok",
            StatusCode::Created => "2 Created",
            StatusCode::Updated => "3 Updated",
            StatusCode::BadRequest => "4 Bad Request",
            StatusCode::NotFound => "5 Not Found",
            StatusCode::Error => "6 Error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StatusCode> for &'static str {
    fn from(status: StatusCode) -> Self {
        status.as_str()
    }
}

impl TryFrom<String> for StatusCode {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, String> {
        StatusCode::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| format!("Unknown response status: {:?}", value))
    }
}

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    status: StatusCode,

    /// Payload (JSON document, echoed body, or error message)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    body: Option<String>,
}

impl Response {
    /// Create an OK response with optional payload
    pub fn ok(body: Option<String>) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
        }
    }

    /// Create a CREATED response carrying the new resource
    pub fn created(body: String) -> Self {
        Self {
            status: StatusCode::Created,
            body: Some(body),
        }
    }

    /// Create an UPDATED response
    pub fn updated() -> Self {
        Self {
            status: StatusCode::Updated,
            body: None,
        }
    }

    /// Create a BAD_REQUEST response explaining what was wrong
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BadRequest,
            body: Some(message.into()),
        }
    }

    /// Create a NOT_FOUND response
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            body: None,
        }
    }

    /// Create an ERROR response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Error,
            body: Some(message.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
