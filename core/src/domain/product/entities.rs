use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product scraped from the first listing of a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    pub brand: String,
    /// Hazard score, `None` when absent or not a number.
    pub score: Option<i32>,
    pub category: String,
    pub ingredients: Vec<String>,
    pub concerns: Vec<String>,
}
