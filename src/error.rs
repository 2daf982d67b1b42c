//! Error types for the ticket cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Ticket Error Enum ==
/// Unified error type for the ticket cache server.
///
/// Every variant is recoverable by the caller; none is fatal to the
/// process.
#[derive(Error, Debug)]
pub enum TicketError {
    /// Ticket is already tracked; re-adding never refreshes it
    #[error("Ticket already exists: {0}")]
    AlreadyExists(String),

    /// No record for this ticket
    #[error("Ticket not found: {0}")]
    NotFound(String),

    /// Record existed but its lifetime lapsed
    #[error("Ticket expired: {0}")]
    Expired(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Duplicate issuance is a client protocol error, not an auth failure
            TicketError::AlreadyExists(_) => StatusCode::CONFLICT,
            TicketError::NotFound(_) => StatusCode::UNAUTHORIZED,
            TicketError::Expired(_) => StatusCode::UNAUTHORIZED,
            TicketError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the ticket cache server.
pub type Result<T> = std::result::Result<T, TicketError>;
