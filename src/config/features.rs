//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Expose internal error messages in API responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable HTTP request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "verbose_errors": true,
            "enable_tracing": false
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(flags.verbose_errors);
        assert!(!flags.enable_tracing);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
    }
}
