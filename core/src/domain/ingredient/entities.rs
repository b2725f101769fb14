use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SafetyLevel {
    #[serde(rename = "Low Concern")]
    LowConcern,
    #[serde(rename = "Moderate Concern")]
    ModerateConcern,
    #[serde(rename = "High Concern")]
    HighConcern,
}

impl SafetyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::LowConcern => "Low Concern",
            SafetyLevel::ModerateConcern => "Moderate Concern",
            SafetyLevel::HighConcern => "High Concern",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification data for a known ingredient, everything except its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientProfile {
    pub function: String,
    /// 1 (lowest hazard) to 10 (highest hazard).
    pub ewg_score: u8,
    pub safety_level: SafetyLevel,
    pub reason_for_concern: String,
    pub common_use: String,
}

impl IngredientProfile {
    pub fn new(
        function: &str,
        ewg_score: u8,
        safety_level: SafetyLevel,
        reason_for_concern: &str,
        common_use: &str,
    ) -> Self {
        Self {
            function: function.to_string(),
            ewg_score: ewg_score.clamp(1, 10),
            safety_level,
            reason_for_concern: reason_for_concern.to_string(),
            common_use: common_use.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    pub name: String,
    pub function: String,
    pub ewg_score: u8,
    pub safety_level: SafetyLevel,
    pub reason_for_concern: String,
    pub common_use: String,
    /// Reference key the token matched, `None` when the unknown default was used.
    pub matched_key: Option<String>,
}

impl IngredientRecord {
    pub fn new(name: String, profile: &IngredientProfile, matched_key: Option<String>) -> Self {
        Self {
            name,
            function: profile.function.clone(),
            ewg_score: profile.ewg_score,
            safety_level: profile.safety_level,
            reason_for_concern: profile.reason_for_concern.clone(),
            common_use: profile.common_use.clone(),
            matched_key,
        }
    }

    pub fn is_known(&self) -> bool {
        self.matched_key.is_some()
    }
}
