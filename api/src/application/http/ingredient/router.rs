use super::handlers::{
    analyze_ingredients::{__path_analyze_ingredients, analyze_ingredients},
    get_reference_table::{__path_get_reference_table, get_reference_table},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_ingredients, get_reference_table))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/analyze", state.args.server.root_path),
            post(analyze_ingredients),
        )
        .route(
            &format!("{}/ingredients/reference", state.args.server.root_path),
            get(get_reference_table),
        )
}
