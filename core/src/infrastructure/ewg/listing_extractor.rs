use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error};

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{entities::Product, helpers::parse_hazard_score, ports::ProductExtractor},
};

/// CSS selectors describing the search results markup.
///
/// Every selector except `listing` is evaluated inside the first listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelectors {
    pub listing: String,
    pub name: String,
    pub brand: String,
    pub score: String,
    pub category: String,
    pub ingredients: String,
    pub concerns: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            listing: ".product-listing".to_string(),
            name: "h2.product-title".to_string(),
            brand: ".product-brand".to_string(),
            score: ".product-hazard-score".to_string(),
            category: ".product-type".to_string(),
            ingredients: ".product-ingredients-list li".to_string(),
            concerns: ".product-hazards li".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EwgListingExtractor {
    listing: Selector,
    name: Selector,
    brand: Selector,
    score: Selector,
    category: Selector,
    ingredients: Selector,
    concerns: Selector,
}

impl EwgListingExtractor {
    /// Compiles `selectors` up front so a typo fails at startup, not per request.
    pub fn new(selectors: &ListingSelectors) -> Result<Self, CoreError> {
        Ok(Self {
            listing: parse_selector(&selectors.listing)?,
            name: parse_selector(&selectors.name)?,
            brand: parse_selector(&selectors.brand)?,
            score: parse_selector(&selectors.score)?,
            category: parse_selector(&selectors.category)?,
            ingredients: parse_selector(&selectors.ingredients)?,
            concerns: parse_selector(&selectors.concerns)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector, CoreError> {
    Selector::parse(selector).map_err(|e| {
        error!("Invalid listing selector `{}`: {:?}", selector, e);
        CoreError::Internal(format!("Invalid listing selector `{}`", selector))
    })
}

/// Text of every element matching `selector`, concatenated and trimmed.
fn joined_text(listing: &ElementRef<'_>, selector: &Selector) -> String {
    listing
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trimmed text of each element matching `selector`, empty entries dropped.
fn item_texts(listing: &ElementRef<'_>, selector: &Selector) -> Vec<String> {
    listing
        .select(selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

impl ProductExtractor for EwgListingExtractor {
    fn extract_first_listing(&self, html: &str) -> Result<Option<Product>, CoreError> {
        let document = Html::parse_document(html);

        let Some(listing) = document.select(&self.listing).next() else {
            debug!("no product listing on search page");
            return Ok(None);
        };

        let product = Product {
            name: joined_text(&listing, &self.name),
            brand: joined_text(&listing, &self.brand),
            score: parse_hazard_score(&joined_text(&listing, &self.score)),
            category: joined_text(&listing, &self.category),
            ingredients: item_texts(&listing, &self.ingredients),
            concerns: item_texts(&listing, &self.concerns),
        };

        Ok(Some(product))
    }
}
