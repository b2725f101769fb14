use super::handlers::lookup_product::{__path_lookup_product, lookup_product};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(lookup_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/products/search", state.args.server.root_path),
        get(lookup_product),
    )
}
