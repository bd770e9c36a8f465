//! ComputeAhpHandler - Command handler for the Analytic Hierarchy Process.

use tracing::{debug, info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::mcda::{AhpCalculator, AhpOutcome, McdaError, PairwiseComparisonMatrix};

use super::calculation::{Calculation, CalculationLimits, McdaMethod};
use super::decision_input::{
    ensure_unique_names, label_blank_names, ALTERNATIVE_LABEL, CRITERION_LABEL,
};

/// Command to rank alternatives with AHP.
///
/// Judgments are upper triangles in row-major order: `(0,1), (0,2), ...,
/// (1,2), ...`. Lower entries are implied as reciprocals.
#[derive(Debug, Clone)]
pub struct ComputeAhpCommand {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub criteria_comparisons: Vec<f64>,
    /// One upper triangle per criterion, in criteria order.
    pub alternative_comparisons: Vec<Vec<f64>>,
}

/// Handler for AHP calculations.
pub struct ComputeAhpHandler {
    limits: CalculationLimits,
}

impl ComputeAhpHandler {
    pub fn new(limits: CalculationLimits) -> Self {
        Self { limits }
    }

    pub fn handle(
        &self,
        mut cmd: ComputeAhpCommand,
    ) -> Result<Calculation<AhpOutcome>, DomainError> {
        self.limits.check_criteria(cmd.criteria.len())?;
        self.limits.check_alternatives(cmd.alternatives.len())?;
        label_blank_names(cmd.criteria.iter_mut(), CRITERION_LABEL);
        label_blank_names(cmd.alternatives.iter_mut(), ALTERNATIVE_LABEL);
        ensure_unique_names("criteria", cmd.criteria.iter())?;
        ensure_unique_names("alternatives", cmd.alternatives.iter())?;

        if cmd.alternative_comparisons.len() != cmd.criteria.len() {
            return Err(McdaError::shape(
                "alternative comparison matrices",
                cmd.criteria.len(),
                cmd.alternative_comparisons.len(),
            )
            .into());
        }

        let criteria_matrix = PairwiseComparisonMatrix::from_upper_triangle(
            cmd.criteria.clone(),
            &cmd.criteria_comparisons,
        )
        .map_err(|e| DomainError::from(e).with_detail("matrix", "criteria"))?;

        let alternative_matrices = cmd
            .criteria
            .iter()
            .zip(&cmd.alternative_comparisons)
            .map(|(criterion, upper)| {
                PairwiseComparisonMatrix::from_upper_triangle(cmd.alternatives.clone(), upper)
                    .map_err(|e| DomainError::from(e).with_detail("matrix", criterion.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            alternatives = cmd.alternatives.len(),
            criteria = cmd.criteria.len(),
            "Computing AHP ranking"
        );

        let outcome =
            AhpCalculator::compute(&criteria_matrix, &alternative_matrices).map_err(|e| {
                debug!(error = %e, "AHP calculation rejected");
                DomainError::from(e)
            })?;
        let calculation = Calculation::new(McdaMethod::Ahp, outcome);

        if !calculation.outcome.criteria_consistency.is_acceptable() {
            warn!(
                calculation_id = %calculation.calculation_id,
                consistency_ratio = ?calculation.outcome.consistency_ratio(),
                "Criteria judgments are inconsistent"
            );
        }
        for criterion in calculation.outcome.inconsistent_criteria() {
            warn!(
                calculation_id = %calculation.calculation_id,
                criterion = %criterion,
                "Alternative judgments are inconsistent"
            );
        }

        info!(
            calculation_id = %calculation.calculation_id,
            winner = %calculation.outcome.ranking.winner,
            "AHP calculation completed"
        );

        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn command() -> ComputeAhpCommand {
        ComputeAhpCommand {
            criteria: vec!["Cost".into(), "Quality".into(), "Support".into()],
            alternatives: vec!["Vendor A".into(), "Vendor B".into()],
            criteria_comparisons: vec![2.0, 3.0, 2.0],
            alternative_comparisons: vec![vec![3.0], vec![0.5], vec![1.0]],
        }
    }

    #[test]
    fn computes_consistent_ranking() {
        let handler = ComputeAhpHandler::new(CalculationLimits::default());
        let calc = handler.handle(command()).unwrap();

        assert_eq!(calc.method, McdaMethod::Ahp);
        assert_eq!(calc.outcome.is_consistent(), Some(true));
        assert_eq!(calc.outcome.ranking.winner, "Vendor A");
        assert_eq!(calc.outcome.alternative_priorities.len(), 3);
    }

    #[test]
    fn missing_alternative_matrix_is_shape_error() {
        let mut cmd = command();
        cmd.alternative_comparisons.pop();

        let handler = ComputeAhpHandler::new(CalculationLimits::default());
        let err = handler.handle(cmd).unwrap_err();

        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert_eq!(err.details.get("expected").map(String::as_str), Some("3"));
    }

    #[test]
    fn names_the_matrix_with_bad_judgment() {
        let mut cmd = command();
        cmd.alternative_comparisons[1] = vec![-2.0];

        let handler = ComputeAhpHandler::new(CalculationLimits::default());
        let err = handler.handle(cmd).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert_eq!(err.details.get("matrix").map(String::as_str), Some("Quality"));
    }

    #[test]
    fn wrong_triangle_length_names_criteria_matrix() {
        let mut cmd = command();
        cmd.criteria_comparisons = vec![2.0, 3.0];

        let handler = ComputeAhpHandler::new(CalculationLimits::default());
        let err = handler.handle(cmd).unwrap_err();

        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert_eq!(err.details.get("matrix").map(String::as_str), Some("criteria"));
    }

    #[test]
    fn unnamed_items_are_labelled_by_position() {
        let mut cmd = command();
        cmd.criteria[1] = String::new();
        cmd.alternatives = vec![String::new(), String::new()];

        let handler = ComputeAhpHandler::new(CalculationLimits::default());
        let calc = handler.handle(cmd).unwrap();

        assert_eq!(calc.outcome.alternative_priorities[1].criterion, "Criterion 2");
        assert_eq!(calc.outcome.ranking.winner, "Alternative 1");
    }

    #[test]
    fn respects_configured_limits() {
        let handler = ComputeAhpHandler::new(CalculationLimits::new(20, 2));
        let err = handler.handle(command()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputTooLarge);
    }
}
