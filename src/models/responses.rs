//! Response DTOs for the ticket cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::ticket::TicketStats;

/// Response body for the add operation (PUT /add)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The ticket that was registered
    pub ticket: String,
}

impl AddResponse {
    /// Creates a new AddResponse
    pub fn new(ticket: impl Into<String>) -> Self {
        let ticket = ticket.into();
        Self {
            message: format!("Ticket '{}' added successfully", ticket),
            ticket,
        }
    }
}

/// Response body for the auth operation (POST /auth)
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// Success message
    pub message: String,
    /// The ticket that was authenticated
    pub ticket: String,
}

impl AuthResponse {
    /// Creates a new AuthResponse
    pub fn new(ticket: impl Into<String>) -> Self {
        let ticket = ticket.into();
        Self {
            message: format!("Ticket '{}' authenticated successfully", ticket),
            ticket,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Tickets accepted by add
    pub added: u64,
    /// Adds rejected as duplicates
    pub duplicates: u64,
    /// Successful authentications
    pub hits: u64,
    /// Authentications against unknown tickets
    pub misses: u64,
    /// Authentications against expired tickets
    pub expirations: u64,
    /// Records removed by expiry sweeps
    pub swept: u64,
    /// Live tickets currently tracked
    pub active: usize,
    /// Auth success rate (hits / all auth attempts)
    pub auth_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &TicketStats) -> Self {
        Self {
            added: stats.added,
            duplicates: stats.duplicates,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            swept: stats.swept,
            active: stats.active,
            auth_rate: stats.auth_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
