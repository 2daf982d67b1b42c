//! Request DTOs for the ticket cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::ticket::MAX_TICKET_LENGTH;

/// Request body for the add operation (PUT /add)
///
/// # Fields
/// - `ticket`: The opaque session ticket to register
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    /// The session ticket
    pub ticket: String,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_ticket(&self.ticket)
    }
}

/// Request body for the auth operation (POST /auth)
///
/// # Fields
/// - `ticket`: The opaque session ticket to authenticate
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    /// The session ticket
    pub ticket: String,
}

impl AuthRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_ticket(&self.ticket)
    }
}

/// Shared ticket validation for both request types.
fn validate_ticket(ticket: &str) -> Option<String> {
    if ticket.is_empty() {
        return Some("Ticket cannot be empty".to_string());
    }
    if ticket.len() > MAX_TICKET_LENGTH {
        return Some(format!(
            "Ticket exceeds maximum length of {} bytes",
            MAX_TICKET_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_deserialize() {
        let json = r#"{"ticket": "session-abc123"}"#;
        let req: AddRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ticket, "session-abc123");
    }

    #[test]
    fn test_auth_request_deserialize() {
        let json = r#"{"ticket": "session-abc123"}"#;
        let req: AuthRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ticket, "session-abc123");
    }

    #[test]
    fn test_validate_empty_ticket() {
        let req = AddRequest {
            ticket: "".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_oversized_ticket() {
        let req = AuthRequest {
            ticket: "x".repeat(MAX_TICKET_LENGTH + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = AddRequest {
            ticket: "valid_ticket".to_string(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_max_length_ticket_accepted() {
        let req = AuthRequest {
            ticket: "x".repeat(MAX_TICKET_LENGTH),
        };
        assert!(req.validate().is_none());
    }
}
