pub mod listing_extractor;
pub mod search_client;

pub use listing_extractor::{EwgListingExtractor, ListingSelectors};
pub use search_client::EwgSearchClient;
