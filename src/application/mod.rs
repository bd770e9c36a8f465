//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain calculations: it enforces configured input
//! limits, assembles validated domain inputs, and reports outcomes.

pub mod handlers;

pub use handlers::mcda::{
    Calculation, CalculationLimits, ComputeAhpCommand, ComputeAhpHandler, ComputeSawCommand,
    ComputeSawHandler, ComputeTopsisCommand, ComputeTopsisHandler, ComputeWpCommand,
    ComputeWpHandler, CriterionInput, DecisionInput, McdaMethod,
};
