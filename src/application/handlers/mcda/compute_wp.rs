//! ComputeWpHandler - Command handler for Weighted Product.

use tracing::{debug, info};

use crate::domain::foundation::DomainError;
use crate::domain::mcda::{WpCalculator, WpOutcome};

use super::calculation::{Calculation, CalculationLimits, McdaMethod};
use super::decision_input::DecisionInput;

/// Command to rank alternatives with WP.
#[derive(Debug, Clone)]
pub struct ComputeWpCommand {
    pub input: DecisionInput,
}

/// Handler for WP calculations.
pub struct ComputeWpHandler {
    limits: CalculationLimits,
}

impl ComputeWpHandler {
    pub fn new(limits: CalculationLimits) -> Self {
        Self { limits }
    }

    pub fn handle(&self, cmd: ComputeWpCommand) -> Result<Calculation<WpOutcome>, DomainError> {
        let (matrix, weights) = cmd.input.assemble(&self.limits)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Computing WP ranking"
        );

        let outcome = WpCalculator::compute(&matrix, &weights).map_err(|e| {
            debug!(error = %e, "WP calculation rejected");
            DomainError::from(e)
        })?;
        let calculation = Calculation::new(McdaMethod::Wp, outcome);

        info!(
            calculation_id = %calculation.calculation_id,
            winner = %calculation.outcome.ranking.winner,
            "WP calculation completed"
        );

        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mcda::CriterionInput;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::mcda::Direction;

    fn command(quality: [f64; 2]) -> ComputeWpCommand {
        ComputeWpCommand {
            input: DecisionInput {
                alternatives: vec!["Basic".into(), "Premium".into()],
                criteria: vec![CriterionInput {
                    name: "Quality".into(),
                    direction: Direction::Benefit,
                }],
                matrix: vec![vec![quality[0]], vec![quality[1]]],
                weights: vec![1.0],
            },
        }
    }

    #[test]
    fn ranks_by_weighted_product() {
        let handler = ComputeWpHandler::new(CalculationLimits::default());
        let calc = handler.handle(command([2.0, 8.0])).unwrap();

        assert_eq!(calc.method, McdaMethod::Wp);
        assert_eq!(calc.outcome.ranking.winner, "Premium");
        assert!((calc.outcome.scores[0] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_score_is_invalid_range() {
        let handler = ComputeWpHandler::new(CalculationLimits::default());
        let err = handler.handle(command([0.0, 8.0])).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidRange);
        assert_eq!(err.details.get("row").map(String::as_str), Some("0"));
    }
}
