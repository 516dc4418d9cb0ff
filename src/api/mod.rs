//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for evaluating production
//! bonuses and calculating bi-weekly payroll from raw source tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, ProductionRequest};
pub use response::{ApiError, PayrollResponse, ProductionResponse};
pub use state::AppState;
