#![allow(dead_code)]

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use axum::{Router, extract::Query, http::StatusCode, response::Html, routing::get};
use axum_test::TestServer;
use clap::Parser;
use skinscan_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use test_context::AsyncTestContext;
use tokio::task::JoinHandle;

pub const LISTING_PAGE: &str = r#"
<html><body>
  <div class="product-listing">
    <h2 class="product-title">Gentle Skin Cleanser</h2>
    <span class="product-brand">Cetaphil</span>
    <span class="product-hazard-score">3</span>
    <span class="product-type">Facial Cleanser</span>
    <ul class="product-ingredients-list">
      <li>Water</li>
      <li>Cetyl Alcohol</li>
      <li>Propylparaben</li>
    </ul>
    <ul class="product-hazards">
      <li>Endocrine disruption</li>
    </ul>
  </div>
</body></html>
"#;

pub const EMPTY_PAGE: &str = "<html><body><p>No results found.</p></body></html>";

pub const BROKEN_PAGE: &str = r#"
<html><body>
  <div class="product-listing">
    <h2 class="product-title">   </h2>
    <span class="product-brand">Unknown</span>
  </div>
</body></html>
"#;

async fn search_page(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Html<String>) {
    let search = params.get("search").map(String::as_str).unwrap_or_default();

    match search {
        "outage" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Html("maintenance".to_string()),
        ),
        "broken" => (StatusCode::OK, Html(BROKEN_PAGE.to_string())),
        query if query.to_lowercase().contains("cleanser") => {
            (StatusCode::OK, Html(LISTING_PAGE.to_string()))
        }
        _ => (StatusCode::OK, Html(EMPTY_PAGE.to_string())),
    }
}

/// Local stand-in for the EWG search page.
pub struct UpstreamContext {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl UpstreamContext {
    pub fn search_url(&self) -> String {
        format!("http://{}/search/", self.addr)
    }

    pub fn server(&self) -> TestServer {
        server_with(&[
            "skinscan",
            "--ewg-search-url",
            &self.search_url(),
            "--root-path",
            "",
            "--allowed-origins",
            "*",
        ])
    }
}

impl AsyncTestContext for UpstreamContext {
    async fn setup() -> Self {
        let app = Router::new().route("/search/", get(search_page));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, handle }
    }

    async fn teardown(self) {
        self.handle.abort();
    }
}

pub fn server_with(argv: &[&str]) -> TestServer {
    let args = Arc::new(Args::parse_from(argv));
    let app = router(state(args).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}

/// Server whose upstream points at a port nothing listens on.
pub async fn server_with_unreachable_upstream() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    server_with(&[
        "skinscan",
        "--ewg-search-url",
        &format!("http://{}/search/", addr),
        "--root-path",
        "",
        "--allowed-origins",
        "*",
    ])
}

pub fn default_server() -> TestServer {
    server_with(&["skinscan", "--root-path", "", "--allowed-origins", "*"])
}
