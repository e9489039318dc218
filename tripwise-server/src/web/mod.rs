//! Web layer for the fare comparison engine.
//!
//! Provides JSON endpoints for listing stations, measuring routes and
//! comparing fares.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
