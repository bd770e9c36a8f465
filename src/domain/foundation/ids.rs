//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a single calculation run.
///
/// Calculations are never stored; the id only correlates a response with
/// its log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationId(Uuid);

impl CalculationId {
    /// Creates a new random CalculationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CalculationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_ids_are_unique() {
        assert_ne!(CalculationId::new(), CalculationId::new());
    }

    #[test]
    fn calculation_id_displays_as_v4_uuid() {
        let id = CalculationId::new();
        let parsed = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn calculation_id_serializes_as_plain_string() {
        let id = CalculationId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
