use crate::domain::ingredient::{
    reference_table::ReferenceEntry,
    value_objects::{AnalyzeIngredientsInput, IngredientAnalysis},
};

/// Service trait for ingredient classification
pub trait IngredientService: Send + Sync {
    fn analyze_ingredients(&self, input: AnalyzeIngredientsInput) -> IngredientAnalysis;

    /// Reference entries in match order.
    fn reference_entries(&self) -> Vec<ReferenceEntry>;
}
