//! Multi-Criteria Decision Analysis calculators.
//!
//! Pure, synchronous computations over immutable inputs:
//!
//! - `ahp` - Analytic Hierarchy Process over pairwise comparison matrices
//! - `saw` - Simple Additive Weighting over a decision matrix
//! - `wp` - Weighted Product over a decision matrix
//! - `topsis` - Closeness to ideal and anti-ideal solutions
//!
//! Shared building blocks (normalization, priority derivation, consistency,
//! ranking) live in their own modules so each method composes them.

mod ahp;
mod consistency;
mod decision_matrix;
mod error;
mod linalg;
mod normalizer;
mod pairwise;
mod priority;
mod ranker;
mod saw;
mod topsis;
mod wp;

pub use ahp::{AhpCalculator, AhpOutcome, CriterionPriorities};
pub use consistency::{
    random_index, Consistency, ConsistencyChecker, ConsistencyReport, CONSISTENCY_THRESHOLD,
    RANDOM_INDEX,
};
pub use decision_matrix::{
    Criterion, DecisionMatrix, DecisionMatrixBuilder, Direction, WeightVector,
};
pub use error::{Location, McdaError};
pub use normalizer::Normalizer;
pub use pairwise::{upper_triangle_len, PairwiseComparisonMatrix, RECIPROCAL_TOLERANCE};
pub use priority::{PriorityDeriver, PriorityIndex};
pub use ranker::{ChartBar, RankedAlternative, RankedResult, Ranker, RankingMethod, SELECTED_LABEL};
pub use saw::{SawCalculator, SawOutcome};
pub use topsis::{IdealDistance, TopsisCalculator, TopsisOutcome};
pub use wp::{WpCalculator, WpOutcome};
