//! Request validation
//!
//! Structural and semantic checks on a decoded [`Request`]. Every rule is
//! evaluated so one response can report several problems at once.

use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use super::{Method, Request};

/// A single rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("Missing method")]
    MissingMethod,

    #[error("Illegal method")]
    IllegalMethod,

    #[error("Missing resource")]
    MissingResource,

    #[error("Missing date")]
    MissingDate,

    #[error("Illegal date")]
    IllegalDate,

    #[error("Missing body")]
    MissingBody,

    #[error("Illegal body")]
    IllegalBody,
}

/// All violations found in one request, reported as a space-joined message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }

    /// The combined message, e.g. `"Missing method Missing date"`
    pub fn message(&self) -> String {
        join(&self.violations)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current Unix time in seconds
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Validate a request against the current time
pub fn validate(request: &Request) -> Result<(), ValidationError> {
    validate_at(request, unix_now())
}

/// Validate a request as if the current Unix time were `now`
pub fn validate_at(request: &Request, now: u64) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    let method = match present(request.method()) {
        None => {
            violations.push(Violation::MissingMethod);
            None
        }
        Some(raw) => match raw.parse::<Method>() {
            Ok(method) => Some(method),
            Err(()) => {
                violations.push(Violation::IllegalMethod);
                None
            }
        },
    };
    let is_echo = method == Some(Method::Echo);

    if !is_echo && present(request.path()).is_none() {
        violations.push(Violation::MissingResource);
    }

    match present(request.date()) {
        None => violations.push(Violation::MissingDate),
        Some(date) => {
            if !is_legal_date(date, now) {
                violations.push(Violation::IllegalDate);
            }
        }
    }

    let requires_body = method.map_or(false, |m| m.requires_body());
    match present(request.body()) {
        None if requires_body => violations.push(Violation::MissingBody),
        Some(body) if method == Some(Method::Update) && !is_json_document(body) => {
            violations.push(Violation::IllegalBody)
        }
        _ => {}
    }

    if violations.is_empty() {
        tracing::debug!("Valid request");
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Empty strings count as missing
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

fn is_legal_date(date: &str, now: u64) -> bool {
    match date.parse::<i64>() {
        Ok(secs) => secs >= 0 && secs as u64 <= now,
        Err(_) => false,
    }
}

/// A JSON object or array: matching outer brackets and a successful parse
pub fn is_json_document(text: &str) -> bool {
    let text = text.trim();
    let bracketed = (text.starts_with('{') && text.ends_with('}'))
        || (text.starts_with('[') && text.ends_with(']'));

    bracketed && serde_json::from_str::<serde_json::Value>(text).is_ok()
}
