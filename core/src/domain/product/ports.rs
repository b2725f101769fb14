use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::Product, value_objects::LookupProductInput},
};

/// Fetches the raw HTML of a product search results page
#[cfg_attr(test, mockall::automock)]
pub trait ProductSearchClient: Send + Sync {
    fn fetch_search_page(
        &self,
        query: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Pulls the first product listing out of a search results page.
///
/// Implementations own the page-structure knowledge (selectors), so a change on
/// the third-party site only touches the adapter.
#[cfg_attr(test, mockall::automock)]
pub trait ProductExtractor: Send + Sync {
    /// `Ok(None)` when the page has no listing at all.
    fn extract_first_listing(&self, html: &str) -> Result<Option<Product>, CoreError>;
}

/// Service trait for remote product lookup
pub trait ProductLookupService: Send + Sync {
    fn lookup_product(
        &self,
        input: LookupProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;
}
