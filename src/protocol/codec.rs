//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! A frame is a single UTF-8 JSON object. There is no length prefix and no
//! delimiter; see [`super::frame`] for how frames are cut from the stream.
//!
//! ### Request
//! ```text
//! {"method": "read", "path": "/api/categories/1", "date": "1700000000", "body": null}
//! ```
//!
//! ### Response
//! ```text
//! {"status": "1 Ok", "body": "{\"cid\":1,\"name\":\"Beverages\"}"}
//! ```

use crate::error::{CatalogError, Result};
use super::{Request, Response};

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Decode a request frame
///
/// The frame must be UTF-8 and hold a JSON object. Shape problems are decode
/// errors; missing or illegal field values are left to the validator.
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| CatalogError::Decode(format!("request is not valid UTF-8: {}", e)))?;

    if text.trim().is_empty() {
        return Err(CatalogError::Decode("empty request".to_string()));
    }

    let request: Option<Request> =
        serde_json::from_str(text).map_err(|e| CatalogError::Decode(e.to_string()))?;

    request.ok_or_else(|| CatalogError::Decode("request is null".to_string()))
}

/// Encode a request to bytes (client side)
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    serde_json::to_vec(request).map_err(|e| CatalogError::Serialization(e.to_string()))
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to bytes
///
/// Format: `{"status":"<code> <Label>"}` plus `"body"` when present
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    serde_json::to_vec(response).map_err(|e| CatalogError::Serialization(e.to_string()))
}

/// Decode a response from bytes (client side)
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    if bytes.is_empty() {
        return Err(CatalogError::Protocol(
            "connection closed without a response".to_string(),
        ));
    }

    serde_json::from_slice(bytes).map_err(|e| CatalogError::Protocol(e.to_string()))
}
