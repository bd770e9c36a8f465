//! Calculation input limits

use serde::Deserialize;

use super::error::ValidationError;

/// Largest matrix dimension any calculator accepts.
///
/// The AHP random index table stops at 20, so the same ceiling applies to
/// every method.
pub const MAX_SUPPORTED_DIMENSION: usize = 20;

/// Upper bounds on calculator input sizes
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum number of alternatives per calculation
    #[serde(default = "default_max")]
    pub max_alternatives: usize,

    /// Maximum number of criteria per calculation
    #[serde(default = "default_max")]
    pub max_criteria: usize,
}

impl LimitsConfig {
    /// Validate limits configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_SUPPORTED_DIMENSION).contains(&self.max_alternatives) {
            return Err(ValidationError::InvalidLimit("max_alternatives"));
        }
        if !(1..=MAX_SUPPORTED_DIMENSION).contains(&self.max_criteria) {
            return Err(ValidationError::InvalidLimit("max_criteria"));
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_alternatives: default_max(),
            max_criteria: default_max(),
        }
    }
}

fn default_max() -> usize {
    MAX_SUPPORTED_DIMENSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_defaults() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.max_alternatives, 20);
        assert_eq!(limits.max_criteria, 20);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero() {
        let limits = LimitsConfig {
            max_criteria: 0,
            ..Default::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(ValidationError::InvalidLimit("max_criteria"))
        ));
    }

    #[test]
    fn test_validation_rejects_beyond_supported() {
        let limits = LimitsConfig {
            max_alternatives: 21,
            ..Default::default()
        };
        assert!(limits.validate().is_err());
    }
}
