use axum::extract::State;
use serde::{Deserialize, Serialize};
use skinscan_core::domain::ingredient::{
    ports::IngredientService, reference_table::ReferenceEntry,
};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetReferenceTableResponse {
    pub data: Vec<ReferenceEntry>,
}

#[utoipa::path(
    get,
    path = "/reference",
    tag = "ingredient",
    summary = "List known ingredients",
    description = "Returns the reference table in the order entries are matched.",
    responses(
        (status = 200, body = GetReferenceTableResponse)
    ),
)]
pub async fn get_reference_table(
    State(state): State<AppState>,
) -> Result<Response<GetReferenceTableResponse>, ApiError> {
    Ok(Response::OK(GetReferenceTableResponse {
        data: state.service.reference_entries(),
    }))
}
