use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinscan_core::domain::ingredient::{
    entities::IngredientRecord,
    ports::IngredientService,
    value_objects::{AnalysisSummary, AnalyzeIngredientsInput},
};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeIngredientsResponse {
    pub data: Vec<IngredientRecord>,
    pub summary: AnalysisSummary,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "ingredient",
    summary = "Analyze an ingredient list",
    description = "Splits free text on commas, semicolons and newlines and classifies each ingredient against the reference table. Unknown ingredients get a moderate-concern default.",
    request_body = AnalyzeIngredientsRequest,
    responses(
        (status = 200, body = AnalyzeIngredientsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeIngredientsRequest>,
) -> Result<Response<AnalyzeIngredientsResponse>, ApiError> {
    let analysis = state
        .service
        .analyze_ingredients(AnalyzeIngredientsInput { text: payload.text });

    Ok(Response::OK(AnalyzeIngredientsResponse {
        data: analysis.ingredients,
        summary: analysis.summary,
    }))
}
