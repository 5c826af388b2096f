//! Method definitions
//!
//! The closed set of request methods.

use std::fmt;
use std::str::FromStr;

/// Request methods understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Create,
    Read,
    Update,
    Delete,
    Echo,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Create => "create",
            Method::Read => "read",
            Method::Update => "update",
            Method::Delete => "delete",
            Method::Echo => "echo",
        }
    }

    /// Methods that must carry a body
    pub fn requires_body(&self) -> bool {
        matches!(self, Method::Create | Method::Update | Method::Echo)
    }

    /// Methods whose path must end in a category id
    pub fn requires_id(&self) -> bool {
        matches!(self, Method::Update | Method::Delete)
    }

    /// Methods whose path must not carry a category id
    pub fn forbids_id(&self) -> bool {
        matches!(self, Method::Create)
    }
}

impl FromStr for Method {
    type Err = ();

    // Case-sensitive: "Create" is an illegal method.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "create" => Ok(Method::Create),
            "read" => Ok(Method::Read),
            "update" => Ok(Method::Update),
            "delete" => Ok(Method::Delete),
            "echo" => Ok(Method::Echo),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
