//! Lifecycle service configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Tuning for the document lifecycle service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// How many times create/clone read a fresh next version after losing
    /// an insert race before giving up.
    #[serde(default = "default_max_version_attempts")]
    pub max_version_attempts: u32,
}

impl LifecycleConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_version_attempts == 0 {
            return Err(ValidationError::InvalidVersionAttempts);
        }
        Ok(())
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            max_version_attempts: default_max_version_attempts(),
        }
    }
}

fn default_max_version_attempts() -> u32 {
    3
}
