//! HTTP DTOs for MCDA endpoints.
//!
//! Requests carry matrices already assembled by the front end. Responses wrap
//! the domain outcomes, which are designed for serialization, in a calculation
//! envelope.

use serde::{Deserialize, Serialize};

use crate::application::handlers::mcda::{
    Calculation, ComputeAhpCommand, CriterionInput, DecisionInput, McdaMethod,
};
use crate::domain::foundation::DomainError;
use crate::domain::mcda::{AhpOutcome, ChartBar, Direction, SawOutcome, TopsisOutcome, WpOutcome};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A criterion with its direction; direction defaults to benefit.
#[derive(Debug, Clone, Deserialize)]
pub struct CriterionDto {
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
}

/// Request body for SAW, WP, and TOPSIS.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionMatrixRequest {
    pub alternatives: Vec<String>,
    pub criteria: Vec<CriterionDto>,
    /// One row per alternative, one column per criterion.
    pub matrix: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
}

impl From<DecisionMatrixRequest> for DecisionInput {
    fn from(req: DecisionMatrixRequest) -> Self {
        DecisionInput {
            alternatives: req.alternatives,
            criteria: req
                .criteria
                .into_iter()
                .map(|c| CriterionInput {
                    name: c.name,
                    direction: c.direction,
                })
                .collect(),
            matrix: req.matrix,
            weights: req.weights,
        }
    }
}

/// Request body for AHP.
///
/// Comparisons are upper triangles in row-major order, one per matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct AhpRequest {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub criteria_comparisons: Vec<f64>,
    pub alternative_comparisons: Vec<Vec<f64>>,
}

impl From<AhpRequest> for ComputeAhpCommand {
    fn from(req: AhpRequest) -> Self {
        ComputeAhpCommand {
            criteria: req.criteria,
            alternatives: req.alternatives,
            criteria_comparisons: req.criteria_comparisons,
            alternative_comparisons: req.alternative_comparisons,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Envelope around every calculation result.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse<T> {
    pub calculation_id: String,
    pub method: McdaMethod,
    pub computed_at: String,
    pub result: T,
}

impl<T> CalculationResponse<T> {
    fn wrap<O>(calculation: Calculation<O>, into_result: impl FnOnce(O) -> T) -> Self {
        Self {
            calculation_id: calculation.calculation_id.to_string(),
            method: calculation.method,
            computed_at: calculation.computed_at.to_string(),
            result: into_result(calculation.outcome),
        }
    }
}

/// A decision-matrix outcome plus its bar chart series.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResponse<T> {
    #[serde(flatten)]
    pub outcome: T,
    pub chart: Vec<ChartBar>,
}

/// AHP outcome with the criteria consistency figures lifted to the top level.
#[derive(Debug, Clone, Serialize)]
pub struct AhpResponse {
    #[serde(flatten)]
    pub outcome: AhpOutcome,
    pub consistency_index: Option<f64>,
    pub consistency_ratio: Option<f64>,
    pub consistent: Option<bool>,
    pub chart: Vec<ChartBar>,
}

impl From<Calculation<AhpOutcome>> for CalculationResponse<AhpResponse> {
    fn from(calc: Calculation<AhpOutcome>) -> Self {
        CalculationResponse::wrap(calc, |outcome| AhpResponse {
            consistency_index: outcome.consistency_index(),
            consistency_ratio: outcome.consistency_ratio(),
            consistent: outcome.is_consistent(),
            chart: outcome.ranking.chart(),
            outcome,
        })
    }
}

impl From<Calculation<SawOutcome>> for CalculationResponse<RankedResponse<SawOutcome>> {
    fn from(calc: Calculation<SawOutcome>) -> Self {
        CalculationResponse::wrap(calc, |outcome| RankedResponse {
            chart: outcome.ranking.chart(),
            outcome,
        })
    }
}

impl From<Calculation<WpOutcome>> for CalculationResponse<RankedResponse<WpOutcome>> {
    fn from(calc: Calculation<WpOutcome>) -> Self {
        CalculationResponse::wrap(calc, |outcome| RankedResponse {
            chart: outcome.ranking.chart(),
            outcome,
        })
    }
}

impl From<Calculation<TopsisOutcome>> for CalculationResponse<RankedResponse<TopsisOutcome>> {
    fn from(calc: Calculation<TopsisOutcome>) -> Self {
        CalculationResponse::wrap(calc, |outcome| RankedResponse {
            chart: outcome.ranking.chart(),
            outcome,
        })
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries the domain code, message, and detail map unchanged.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            let map = error
                .details
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect::<serde_json::Map<_, _>>();
            Some(serde_json::Value::Object(map))
        };

        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
