use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_EWG_SEARCH_URL: &str = "https://www.ewg.org/skindeep/search/";

#[derive(Clone, Debug)]
pub struct SkinScanConfig {
    pub product_lookup: ProductLookupConfig,
}

#[derive(Clone, Debug)]
pub struct ProductLookupConfig {
    /// Base URL of the search page; the query is appended as `search=<query>`.
    pub search_url: String,
    pub user_agent: String,
    /// `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl Default for ProductLookupConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_EWG_SEARCH_URL.to_string(),
            user_agent: format!("skinscan/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }
}
