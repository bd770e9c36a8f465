//! ComputeTopsisHandler - Command handler for TOPSIS.

use tracing::{debug, info};

use crate::domain::foundation::DomainError;
use crate::domain::mcda::{TopsisCalculator, TopsisOutcome};

use super::calculation::{Calculation, CalculationLimits, McdaMethod};
use super::decision_input::DecisionInput;

/// Command to rank alternatives with TOPSIS.
#[derive(Debug, Clone)]
pub struct ComputeTopsisCommand {
    pub input: DecisionInput,
}

/// Handler for TOPSIS calculations.
pub struct ComputeTopsisHandler {
    limits: CalculationLimits,
}

impl ComputeTopsisHandler {
    pub fn new(limits: CalculationLimits) -> Self {
        Self { limits }
    }

    pub fn handle(
        &self,
        cmd: ComputeTopsisCommand,
    ) -> Result<Calculation<TopsisOutcome>, DomainError> {
        let (matrix, weights) = cmd.input.assemble(&self.limits)?;

        debug!(
            alternatives = matrix.alternative_count(),
            criteria = matrix.criterion_count(),
            "Computing TOPSIS ranking"
        );

        let outcome = TopsisCalculator::compute(&matrix, &weights).map_err(|e| {
            debug!(error = %e, "TOPSIS calculation rejected");
            DomainError::from(e)
        })?;
        let calculation = Calculation::new(McdaMethod::Topsis, outcome);

        info!(
            calculation_id = %calculation.calculation_id,
            winner = %calculation.outcome.ranking.winner,
            "TOPSIS calculation completed"
        );

        Ok(calculation)
    }
}
