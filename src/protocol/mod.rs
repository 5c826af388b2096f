//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (JSON, one exchange per connection)
//!
//! ### Request Format
//! ```text
//! {"method": "create|read|update|delete|echo",
//!  "path":   "/api/categories[/<id>]",
//!  "date":   "<unix-seconds>",
//!  "body":   "<json-string, optional>"}
//! ```
//!
//! ### Response Format
//! ```text
//! {"status": "<code> <Label>", "body": "<json-string, optional>"}
//! ```
//!
//! ### Status Codes
//! - `1 Ok`
//! - `2 Created`
//! - `3 Updated`
//! - `4 Bad Request`
//! - `5 Not Found`
//! - `6 Error`
//!
//! ### Pipeline
//! frame → [`decode_request`] → [`validate`] → [`route`] → dispatch →
//! [`encode_response`] → frame

mod method;
mod request;
mod response;
mod codec;
pub mod frame;
pub mod validator;
pub mod router;

pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::{Response, StatusCode};
pub use codec::{decode_request, encode_request, decode_response, encode_response};
pub use frame::{write_frame, FrameReader, ShortReadFramer};
pub use validator::{validate, validate_at, ValidationError, Violation};
pub use router::{route, RoutingError};
