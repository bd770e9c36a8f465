//! Route configuration for MCDA endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{compute_ahp, compute_saw, compute_topsis, compute_wp, health, McdaAppState};

/// Creates the MCDA router with all endpoints.
///
/// Routes:
/// - `GET /api/health` - Liveness probe
/// - `POST /api/mcda/ahp` - Analytic Hierarchy Process
/// - `POST /api/mcda/saw` - Simple Additive Weighting
/// - `POST /api/mcda/wp` - Weighted Product
/// - `POST /api/mcda/topsis` - TOPSIS
pub fn mcda_router() -> Router<McdaAppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/mcda/ahp", post(compute_ahp))
        .route("/api/mcda/saw", post(compute_saw))
        .route("/api/mcda/wp", post(compute_wp))
        .route("/api/mcda/topsis", post(compute_topsis))
}
