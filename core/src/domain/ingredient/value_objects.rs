use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::IngredientRecord;

#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total: usize,
    pub low_concern: usize,
    pub moderate_concern: usize,
    pub high_concern: usize,
    /// Records that fell back to the unknown default.
    pub unknown: usize,
    pub highest_score: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientAnalysis {
    pub ingredients: Vec<IngredientRecord>,
    pub summary: AnalysisSummary,
}
