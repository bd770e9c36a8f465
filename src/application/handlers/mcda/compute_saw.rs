//! ComputeSawHandler - Command handler for Simple Additive Weighting.

use tracing::{debug, info};

use crate::domain::foundation::DomainError;
use crate::domain::mcda::{SawCalculator, SawOutcome};

use super::calculation::{Calculation, CalculationLimits, McdaMethod};
use super::decision_input::DecisionInput;

/// Command to rank alternatives with SAW.
#[derive(Debug, Clone)]
pub struct ComputeSawCommand {
    pub input: DecisionInput,
}

/// Handler for SAW calculations.
pub struct ComputeSawHandler {
    limits: CalculationLimits,
}

impl ComputeSawHandler {
    pub fn new(limits: CalculationLimits) -> Self {
        Self { limits }
    }

    pub fn handle(&self, cmd: ComputeSawCommand) -> Result<Calculation<SawOutcome>, DomainError> {
        let (matrix, weights) = cmd.input.assemble(&self.limits)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Computing SAW ranking"
        );

        let outcome = SawCalculator::compute(&matrix, &weights).map_err(|e| {
            debug!(error = %e, "SAW calculation rejected");
            DomainError::from(e)
        })?;
        let calculation = Calculation::new(McdaMethod::Saw, outcome);

        info!(
            calculation_id = %calculation.calculation_id,
            winner = %calculation.outcome.ranking.winner,
            "SAW calculation completed"
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

    fn command(weights: Vec<f64>) -> ComputeSawCommand {
        ComputeSawCommand {
            input: DecisionInput {
                alternatives: vec!["A1".into(), "A2".into(), "A3".into()],
                criteria: vec![
                    CriterionInput {
                        name: "Benefit".into(),
                        direction: Direction::Benefit,
                    },
                    CriterionInput {
                        name: "Cost".into(),
                        direction: Direction::Cost,
                    },
                ],
                matrix: vec![
                    vec![250.0, 200.0],
                    vec![180.0, 150.0],
                    vec![300.0, 250.0],
                ],
                weights,
            },
        }
    }

    #[test]
    fn ranks_worked_example() {
        let handler = ComputeSawHandler::new(CalculationLimits::default());
        let calc = handler.handle(command(vec![0.6, 0.4])).unwrap();

        assert_eq!(calc.method, McdaMethod::Saw);
        assert_eq!(calc.outcome.ranking.winner, "A3");
        assert_eq!(calc.outcome.ranking.order(), vec!["A3", "A1", "A2"]);
    }

    #[test]
    fn weight_mismatch_is_shape_error() {
        let handler = ComputeSawHandler::new(CalculationLimits::default());
        let err = handler.handle(command(vec![1.0])).unwrap_err();

        assert_eq!(err.code, ErrorCode::ShapeMismatch);
        assert_eq!(err.details.get("expected").map(String::as_str), Some("2"));
        assert_eq!(err.details.get("actual").map(String::as_str), Some("1"));
    }

    #[test]
    fn respects_configured_limits() {
        let handler = ComputeSawHandler::new(CalculationLimits::new(2, 20));
        let err = handler.handle(command(vec![0.6, 0.4])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InputTooLarge);
    }
}
