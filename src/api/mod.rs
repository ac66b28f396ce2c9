//! HTTP API module for the Rate Engine.
//!
//! This module provides the REST API endpoints for quoting vehicle
//! bookings from the fleet's rate configuration.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::QuoteRequest;
pub use response::ApiError;
pub use state::AppState;
