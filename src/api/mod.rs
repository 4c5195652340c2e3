//! HTTP API module for the Child Support Assessment Engine.
//!
//! This module provides the REST API endpoints for running assessments,
//! checking wage reductions and reading the saved history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, WageCheckRequest, WageRecordRequest};
pub use response::{ApiError, WageRecordResponse};
pub use state::AppState;
