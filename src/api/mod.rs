//! HTTP API module for the shift tracker.
//!
//! This module exposes the store and the aggregate calculations as JSON
//! endpoints for an external renderer.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, EndShiftResponse, SummaryResponse};
pub use state::AppState;
