use axum::extract::State;
use skinscan_core::domain::product::{
    entities::Product, ports::ProductLookupService, value_objects::LookupProductInput,
};

use crate::application::http::{
    product::validators::LookupProductQuery,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/search",
    tag = "product",
    summary = "Look up a product",
    description = "Searches EWG Skin Deep and returns the first listed product with its hazard score, ingredients and concerns.",
    params(LookupProductQuery),
    responses(
        (status = 200, body = Product),
        (status = 400, description = "Missing query", body = ApiErrorResponse),
        (status = 404, description = "No product listed", body = ApiErrorResponse),
        (status = 500, description = "Listing could not be parsed", body = ApiErrorResponse),
        (status = 502, description = "Upstream site unavailable", body = ApiErrorResponse)
    ),
)]
pub async fn lookup_product(
    State(state): State<AppState>,
    query: LookupProductQuery,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .lookup_product(LookupProductInput { query: query.query })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
