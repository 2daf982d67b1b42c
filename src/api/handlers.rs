//! API Handlers
//!
//! HTTP request handlers for each ticket cache server endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{extract::State, Json};

use crate::config::Config;
use crate::error::{Result, TicketError};
use crate::models::{
    AddRequest, AddResponse, AuthRequest, AuthResponse, HealthResponse, StatsResponse,
};
use crate::ticket::TicketCache;

/// Application state shared across all handlers.
///
/// Contains the ticket cache wrapped in Arc<Mutex<>> for task-safe access.
/// Every operation mutates the cache (auth refreshes deadlines and sweeps),
/// so a plain mutex covers the index and order as one unit.
#[derive(Clone)]
pub struct AppState {
    /// Task-safe ticket cache
    pub tickets: Arc<Mutex<TicketCache>>,
}

impl AppState {
    /// Creates a new AppState with the given ticket cache.
    pub fn new(cache: TicketCache) -> Self {
        Self {
            tickets: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the ticket cache with the configured TTL.
    pub fn from_config(config: &Config) -> Self {
        let cache = TicketCache::new(config.ttl());
        Self::new(cache)
    }
}

/// Handler for PUT /add
///
/// Registers a newly issued session ticket.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(TicketError::InvalidRequest(error_msg));
    }

    // Acquire the cache lock and register the ticket
    let mut tickets = state.tickets.lock().await;
    tickets.add(req.ticket.clone())?;

    Ok(Json(AddResponse::new(req.ticket)))
}

/// Handler for POST /auth
///
/// Authenticates a session ticket, sliding its expiry on success.
pub async fn auth_handler(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<AuthResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(TicketError::InvalidRequest(error_msg));
    }

    // Acquire the cache lock and authenticate
    let mut tickets = state.tickets.lock().await;
    tickets.auth(&req.ticket)?;

    Ok(Json(AuthResponse::new(req.ticket)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire the cache lock for a stats snapshot
    let tickets = state.tickets.lock().await;
    let stats = tickets.stats();

    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(TicketCache::new(Duration::from_secs(300)))
    }

    #[tokio::test]
    async fn test_add_and_auth_handler() {
        let state = test_state();

        // Register a ticket
        let req = AddRequest {
            ticket: "session-1".to_string(),
        };
        let result = add_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());

        // Authenticate it
        let req = AuthRequest {
            ticket: "session-1".to_string(),
        };
        let result = auth_handler(State(state.clone()), Json(req)).await;
        assert!(result.is_ok());
        let Json(response) = result.unwrap();
        assert_eq!(response.ticket, "session-1");
    }

    #[tokio::test]
    async fn test_add_duplicate_ticket() {
        let state = test_state();

        let req = AddRequest {
            ticket: "session-1".to_string(),
        };
        add_handler(State(state.clone()), Json(req.clone()))
            .await
            .unwrap();

        let result = add_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(TicketError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_auth_unknown_ticket() {
        let state = test_state();

        let req = AuthRequest {
            ticket: "nonexistent".to_string(),
        };
        let result = auth_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(TicketError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let Json(response) = stats_handler(State(state)).await;
        assert_eq!(response.added, 0);
        assert_eq!(response.hits, 0);
        assert_eq!(response.active, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(response) = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_add_invalid_request() {
        let state = test_state();

        let req = AddRequest {
            // Empty ticket is invalid at the API boundary
            ticket: "".to_string(),
        };
        let result = add_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(TicketError::InvalidRequest(_))));
    }
}
