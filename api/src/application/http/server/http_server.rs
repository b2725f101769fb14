use std::{any::Any, sync::Arc};

use crate::application::http::health::health_routes;
use crate::application::http::ingredient::router::ingredient_routes;
use crate::application::http::product::router::product_routes;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use skinscan_core::{application::create_service, domain::common::SkinScanConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, error, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let skinscan_config = SkinScanConfig::from(args.as_ref().clone());
    let service = create_service(skinscan_config)?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allow_origin = if allowed_origins.iter().any(|origin| origin.trim() == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin.trim()))
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        debug!("Allowed origins: {:?}", origins);
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            ACCEPT,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
        ]))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown error".to_string()
    };

    error!("Request handler panicked: {}", details);
    ApiError::Unexpected(details).into_response()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(SwaggerUi::new(format!("{}/swagger-ui", root_path)).url(api_docs_url, openapi))
        .merge(ingredient_routes(state.clone()))
        .merge(product_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}
