//! HTTP API module for the pay run desk.
//!
//! This module exposes the pay run workflow as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ProcessRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
