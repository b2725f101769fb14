pub mod analyze_ingredients;
pub mod get_reference_table;
