use crate::{
    domain::{
        common::{SkinScanConfig, entities::app_errors::CoreError, services::Service},
        ingredient::reference_table::ReferenceTable,
    },
    infrastructure::ewg::{EwgListingExtractor, EwgSearchClient, ListingSelectors},
};

pub type SkinScanService = Service<EwgSearchClient, EwgListingExtractor>;

pub fn create_service(config: SkinScanConfig) -> Result<SkinScanService, CoreError> {
    let search_client = EwgSearchClient::new(&config.product_lookup)?;
    let extractor = EwgListingExtractor::new(&ListingSelectors::default())?;

    Ok(Service::new(
        search_client,
        extractor,
        ReferenceTable::builtin(),
    ))
}
