//! Request and Response models for the ticket cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddRequest, AuthRequest};
pub use responses::{AddResponse, AuthResponse, ErrorResponse, HealthResponse, StatsResponse};
