//! Uniform service response envelope.
//!
//! Every service operation resolves to `Envelope<T>`. Duplicates, missing
//! rows and store faults are all carried inside the envelope so no raw fault
//! ever crosses a service boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCause {
    Duplicate,
    NotFound,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    pub data: Option<T>,
    pub status_code: u16,
    pub error_cause: Option<ErrorCause>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            status_code: 200,
            error_cause: None,
        }
    }

    /// Batch-level result: the batch itself succeeded even when individual
    /// records duplicated or failed.
    pub fn multi_status(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            status_code: 207,
            error_cause: None,
        }
    }

    pub fn duplicate() -> Self {
        Self::failure(409, ErrorCause::Duplicate)
    }

    pub fn not_found() -> Self {
        Self::failure(404, ErrorCause::NotFound)
    }

    pub fn internal() -> Self {
        Self::failure(500, ErrorCause::Internal)
    }

    fn failure(status_code: u16, cause: ErrorCause) -> Self {
        Self {
            is_success: false,
            data: None,
            status_code,
            error_cause: Some(cause),
        }
    }

    /// Re-type a failure envelope so a dependency's outcome can be returned
    /// verbatim (e.g. a missing User while creating a Telegram).
    pub fn forward<U>(self) -> Envelope<U> {
        Envelope {
            is_success: self.is_success,
            data: None,
            status_code: self.status_code,
            error_cause: self.error_cause,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Per-record accounting for a seeding batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome<T> {
    pub created: Vec<T>,
    pub duplicates: Vec<String>,
    pub failed: Vec<FailedRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedRecord {
    pub key: String,
    pub reason: String,
}

impl<T> Default for BatchOutcome<T> {
    fn default() -> Self {
        Self {
            created: Vec::new(),
            duplicates: Vec::new(),
            failed: Vec::new(),
        }
    }
}

impl<T> BatchOutcome<T> {
    /// Fold a single record's envelope into the batch buckets, keyed by the
    /// record's natural key.
    pub fn record(&mut self, key: &str, outcome: Envelope<T>) {
        match outcome.status_code {
            200 => {
                if let Some(data) = outcome.data {
                    self.created.push(data);
                }
            }
            409 => self.duplicates.push(key.to_string()),
            code => self.failed.push(FailedRecord {
                key: key.to_string(),
                reason: format!("status {}", code),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_camel_case() {
        let env: Envelope<i32> = Envelope::duplicate();
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["isSuccess"], false);
        assert_eq!(json["statusCode"], 409);
        assert_eq!(json["errorCause"], "DUPLICATE");
        assert!(json["data"].is_null());
    }

    #[test]
    fn forward_preserves_failure_shape() {
        let user_missing: Envelope<String> = Envelope::not_found();
        let forwarded: Envelope<i32> = user_missing.forward();
        assert!(!forwarded.is_success);
        assert_eq!(forwarded.status_code, 404);
        assert_eq!(forwarded.error_cause, Some(ErrorCause::NotFound));
    }
}
