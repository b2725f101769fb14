use std::sync::Arc;

use crate::domain::{
    ingredient::reference_table::ReferenceTable,
    product::ports::{ProductExtractor, ProductSearchClient},
};

/// Service container shared by every request.
///
/// Holds the product lookup adapters and the read-only ingredient reference table.
pub struct Service<S, E>
where
    S: ProductSearchClient,
    E: ProductExtractor,
{
    pub(crate) product_search_client: Arc<S>,
    pub(crate) product_extractor: Arc<E>,
    pub(crate) reference_table: Arc<ReferenceTable>,
}

impl<S, E> Service<S, E>
where
    S: ProductSearchClient,
    E: ProductExtractor,
{
    pub fn new(
        product_search_client: S,
        product_extractor: E,
        reference_table: Arc<ReferenceTable>,
    ) -> Self {
        Self {
            product_search_client: Arc::new(product_search_client),
            product_extractor: Arc::new(product_extractor),
            reference_table,
        }
    }

    pub fn reference_table(&self) -> &ReferenceTable {
        &self.reference_table
    }
}

impl<S, E> Clone for Service<S, E>
where
    S: ProductSearchClient,
    E: ProductExtractor,
{
    fn clone(&self) -> Self {
        Self {
            product_search_client: Arc::clone(&self.product_search_client),
            product_extractor: Arc::clone(&self.product_extractor),
            reference_table: Arc::clone(&self.reference_table),
        }
    }
}
