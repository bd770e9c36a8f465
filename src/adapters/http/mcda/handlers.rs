//! HTTP handlers for MCDA endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::handlers::mcda::{
    CalculationLimits, ComputeAhpHandler, ComputeSawCommand, ComputeSawHandler,
    ComputeTopsisCommand, ComputeTopsisHandler, ComputeWpCommand, ComputeWpHandler,
};
use crate::config::{AppConfig, FeatureFlags};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::mcda::{SawOutcome, TopsisOutcome, WpOutcome};

use super::dto::{
    AhpRequest, AhpResponse, CalculationResponse, DecisionMatrixRequest, ErrorResponse,
    HealthResponse, RankedResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for MCDA endpoints.
#[derive(Debug, Clone)]
pub struct McdaAppState {
    pub limits: CalculationLimits,
    pub features: FeatureFlags,
}

impl McdaAppState {
    pub fn new(limits: CalculationLimits, features: FeatureFlags) -> Self {
        Self { limits, features }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(CalculationLimits::from(&config.limits), config.features.clone())
    }

    pub fn ahp_handler(&self) -> ComputeAhpHandler {
        ComputeAhpHandler::new(self.limits)
    }

    pub fn saw_handler(&self) -> ComputeSawHandler {
        ComputeSawHandler::new(self.limits)
    }

    pub fn wp_handler(&self) -> ComputeWpHandler {
        ComputeWpHandler::new(self.limits)
    }

    pub fn topsis_handler(&self) -> ComputeTopsisHandler {
        ComputeTopsisHandler::new(self.limits)
    }

    fn reject(&self, error: DomainError) -> McdaApiError {
        McdaApiError::from_domain(error, self.features.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /api/mcda/ahp - Rank alternatives with AHP
pub async fn compute_ahp(
    State(state): State<McdaAppState>,
    Json(request): Json<AhpRequest>,
) -> Result<Json<CalculationResponse<AhpResponse>>, McdaApiError> {
    let calculation = state
        .ahp_handler()
        .handle(request.into())
        .map_err(|e| state.reject(e))?;

    Ok(Json(calculation.into()))
}

/// POST /api/mcda/saw - Rank alternatives with SAW
pub async fn compute_saw(
    State(state): State<McdaAppState>,
    Json(request): Json<DecisionMatrixRequest>,
) -> Result<Json<CalculationResponse<RankedResponse<SawOutcome>>>, McdaApiError> {
    let cmd = ComputeSawCommand {
        input: request.into(),
    };
    let calculation = state
        .saw_handler()
        .handle(cmd)
        .map_err(|e| state.reject(e))?;

    Ok(Json(calculation.into()))
}

/// POST /api/mcda/wp - Rank alternatives with WP
pub async fn compute_wp(
    State(state): State<McdaAppState>,
    Json(request): Json<DecisionMatrixRequest>,
) -> Result<Json<CalculationResponse<RankedResponse<WpOutcome>>>, McdaApiError> {
    let cmd = ComputeWpCommand {
        input: request.into(),
    };
    let calculation = state
        .wp_handler()
        .handle(cmd)
        .map_err(|e| state.reject(e))?;

    Ok(Json(calculation.into()))
}

/// POST /api/mcda/topsis - Rank alternatives with TOPSIS
pub async fn compute_topsis(
    State(state): State<McdaAppState>,
    Json(request): Json<DecisionMatrixRequest>,
) -> Result<Json<CalculationResponse<RankedResponse<TopsisOutcome>>>, McdaApiError> {
    let cmd = ComputeTopsisCommand {
        input: request.into(),
    };
    let calculation = state
        .topsis_handler()
        .handle(cmd)
        .map_err(|e| state.reject(e))?;

    Ok(Json(calculation.into()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error for MCDA endpoints.
#[derive(Debug)]
pub enum McdaApiError {
    /// Malformed shape, bad names, or input over the configured limits.
    BadRequest(ErrorResponse),
    /// Well-formed input the calculation cannot accept.
    Unprocessable(ErrorResponse),
    Internal(ErrorResponse),
}

impl McdaApiError {
    /// Maps a domain error to its HTTP class.
    ///
    /// Internal messages are replaced unless `verbose` is set.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        match error.code {
            ErrorCode::InvalidFormat
            | ErrorCode::InputTooLarge
            | ErrorCode::ShapeMismatch => {
                McdaApiError::BadRequest(ErrorResponse::from_domain(&error))
            }
            ErrorCode::InvalidRange
            | ErrorCode::DegenerateInput
            | ErrorCode::UndefinedConsistency => {
                McdaApiError::Unprocessable(ErrorResponse::from_domain(&error))
            }
            ErrorCode::InternalError => {
                error!(error = %error, "MCDA calculation failed unexpectedly");
                if verbose {
                    McdaApiError::Internal(ErrorResponse::from_domain(&error))
                } else {
                    McdaApiError::Internal(ErrorResponse::internal("An unexpected error occurred"))
                }
            }
        }
    }
}

impl IntoResponse for McdaApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            McdaApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            McdaApiError::Unprocessable(error) => (StatusCode::UNPROCESSABLE_ENTITY, error),
            McdaApiError::Internal(error) => (StatusCode::INTERNAL_SERVER_ERROR, error),
        };

        (status, Json(error)).into_response()
    }
}
