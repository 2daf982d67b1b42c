//! API Module
//!
//! HTTP handlers and routing for the ticket cache server REST API.
//!
//! # Endpoints
//! - `PUT /add` - Register a newly issued session ticket
//! - `POST /auth` - Authenticate a ticket and slide its expiry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
