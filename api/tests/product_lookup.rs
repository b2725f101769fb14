mod common;

use axum::http::{
    HeaderName, HeaderValue, Method, StatusCode,
    header::{ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN},
};
use common::{UpstreamContext, server_with_unreachable_upstream};
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_lookup_returns_first_listing(ctx: &mut UpstreamContext) {
    let server = ctx.server();

    let response = server
        .get("/products/search")
        .add_query_param("query", "Gentle Cleanser")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "name": "Gentle Skin Cleanser",
            "brand": "Cetaphil",
            "score": 3,
            "category": "Facial Cleanser",
            "ingredients": ["Water", "Cetyl Alcohol", "Propylparaben"],
            "concerns": ["Endocrine disruption"]
        })
    );
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_repeated_query_uses_first_value(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .get("/products/search")
        .add_raw_query_param("query=Gentle%20Cleanser&query=nothing")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["name"], "Gentle Skin Cleanser");
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_missing_query_is_bad_request(ctx: &mut UpstreamContext) {
    let server = ctx.server();

    for response in [
        server.get("/products/search").await,
        server
            .get("/products/search")
            .add_query_param("query", "")
            .await,
    ] {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Query parameter is required" })
        );
    }
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_no_listing_is_not_found(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .get("/products/search")
        .add_query_param("query", "nothing")
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No product found" })
    );
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_listing_without_name_is_parse_failure(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .get("/products/search")
        .add_query_param("query", "broken")
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to parse product data" })
    );
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_upstream_error_status_is_bad_gateway(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .get("/products/search")
        .add_query_param("query", "outage")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to fetch from EWG website" })
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    let server = server_with_unreachable_upstream().await;

    let response = server
        .get("/products/search")
        .add_query_param("query", "Gentle Cleanser")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to fetch from EWG website" })
    );
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_preflight_allows_any_origin(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .method(Method::OPTIONS, "/products/search")
        .add_header(ORIGIN, HeaderValue::from_static("https://app.example"))
        .add_header(
            ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-headers"),
            HeaderValue::from_static("content-type,apikey"),
        )
        .await;

    assert!(response.status_code().is_success());
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert!(response.text().is_empty());
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_error_responses_carry_cors_headers(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .get("/products/search")
        .add_header(ORIGIN, HeaderValue::from_static("https://app.example"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[test_context(UpstreamContext)]
#[tokio::test]
async fn test_bare_options_gets_empty_cors_response(ctx: &mut UpstreamContext) {
    let response = ctx
        .server()
        .method(Method::OPTIONS, "/products/search")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header(ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    assert!(response.text().is_empty());
}
