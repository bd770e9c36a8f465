//! MCDA calculation handlers.

mod calculation;
mod compute_ahp;
mod compute_saw;
mod compute_topsis;
mod compute_wp;
mod decision_input;

pub use calculation::{Calculation, CalculationLimits, McdaMethod};
pub use compute_ahp::{ComputeAhpCommand, ComputeAhpHandler};
pub use compute_saw::{ComputeSawCommand, ComputeSawHandler};
pub use compute_topsis::{ComputeTopsisCommand, ComputeTopsisHandler};
pub use compute_wp::{ComputeWpCommand, ComputeWpHandler};
pub use decision_input::{CriterionInput, DecisionInput};
