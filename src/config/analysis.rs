//! Analysis configuration

use serde::Deserialize;

use crate::domain::topsis::ValidationMode;

/// Pipeline behaviour settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Whether validation stops at the first failing check
    #[serde(default)]
    pub validation_mode: ValidationMode,
}
