use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    product::{
        entities::Product,
        ports::{ProductExtractor, ProductLookupService, ProductSearchClient},
        value_objects::LookupProductInput,
    },
};

impl<S, E> ProductLookupService for Service<S, E>
where
    S: ProductSearchClient,
    E: ProductExtractor,
{
    #[instrument(skip(self), fields(query = ?input.query))]
    async fn lookup_product(&self, input: LookupProductInput) -> Result<Product, CoreError> {
        let query = input
            .query
            .filter(|query| !query.is_empty())
            .ok_or_else(|| CoreError::Validation("Query parameter is required".to_string()))?;

        let html = self.product_search_client.fetch_search_page(query).await?;

        let product = self
            .product_extractor
            .extract_first_listing(&html)?
            .ok_or(CoreError::NotFound)?;

        // An empty name means the listing markup no longer matches the selectors.
        if product.name.is_empty() {
            warn!("product listing found but its name is empty");
            return Err(CoreError::Parse);
        }

        Ok(product)
    }
}
