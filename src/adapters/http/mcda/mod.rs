//! MCDA HTTP adapter - REST API for the ranking calculators.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{McdaApiError, McdaAppState};
pub use routes::mcda_router;
