//! Ranker - Orders alternatives by final score and assigns ranks.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::error::{Location, McdaError};

/// Conclusion label for the rank-1 alternative.
pub const SELECTED_LABEL: &str = "Selected alternative";

/// How ranks are assigned to equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// Rank is the 1-based sorted position; ties keep input order.
    Ordinal,
    /// Standard competition ("min") ranking: ties share the lowest rank of
    /// their group and the next rank skips by the group size.
    Competition,
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedAlternative {
    pub name: String,
    pub score: f64,
    pub rank: usize,
    /// Position of the alternative in the input.
    pub input_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
}

/// A bar of the score chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub alternative: String,
    pub score: f64,
}

/// Alternatives sorted by score, best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub method: RankingMethod,
    pub alternatives: Vec<RankedAlternative>,
    /// Name of the first rank-1 alternative.
    pub winner: String,
}

impl RankedResult {
    /// The top-ranked alternative.
    pub fn top(&self) -> Option<&RankedAlternative> {
        self.alternatives.first()
    }

    /// Rank of the alternative named `name`.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.alternatives
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.rank)
    }

    /// Names in ranked order.
    pub fn order(&self) -> Vec<&str> {
        self.alternatives.iter().map(|a| a.name.as_str()).collect()
    }

    /// Scores in ranked order, for a bar chart.
    pub fn chart(&self) -> Vec<ChartBar> {
        self.alternatives
            .iter()
            .map(|a| ChartBar {
                alternative: a.name.clone(),
                score: a.score,
            })
            .collect()
    }

    /// Labels rank 1 as selected and every other row with its rank.
    pub fn with_selection_labels(mut self) -> Self {
        for alt in &mut self.alternatives {
            alt.conclusion = Some(if alt.rank == 1 {
                SELECTED_LABEL.to_string()
            } else {
                format!("Not selected, rank {}", alt.rank)
            });
        }
        self
    }

    /// Returns the number of ranked alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

/// Sorts scored alternatives into a ranking.
pub struct Ranker;

impl Ranker {
    /// Ranks alternatives by score, highest first.
    ///
    /// Sorting is stable, so equal scores keep their input order. Scores are
    /// compared exactly.
    ///
    /// # Errors
    /// - `ShapeMismatch` if there are no alternatives or the counts differ
    /// - `DegenerateInput` if a score is not finite
    pub fn rank(
        names: &[String],
        scores: &[f64],
        method: RankingMethod,
    ) -> Result<RankedResult, McdaError> {
        if names.is_empty() {
            return Err(McdaError::empty("alternatives"));
        }
        if scores.len() != names.len() {
            return Err(McdaError::shape("scores", names.len(), scores.len()));
        }
        if let Some(row) = scores.iter().position(|s| !s.is_finite()) {
            return Err(McdaError::degenerate(
                Location::Alternative {
                    row,
                    name: names[row].clone(),
                },
                "final score is not a finite number",
            ));
        }

        let mut order: Vec<usize> = (0..names.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut alternatives: Vec<RankedAlternative> = Vec::with_capacity(order.len());
        for (position, &index) in order.iter().enumerate() {
            let rank = match (method, alternatives.last()) {
                (RankingMethod::Competition, Some(prev)) if prev.score == scores[index] => {
                    prev.rank
                }
                _ => position + 1,
            };
            alternatives.push(RankedAlternative {
                name: names[index].clone(),
                score: scores[index],
                rank,
                input_index: index,
                conclusion: None,
            });
        }

        let winner = alternatives[0].name.clone();

        Ok(RankedResult {
            method,
            alternatives,
            winner,
        })
    }
}
