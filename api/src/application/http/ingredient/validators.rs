use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    /// Ingredient list separated by commas, semicolons or newlines. May be empty.
    pub text: String,
}
