use tracing::{debug, instrument};

use crate::domain::{
    common::services::Service,
    ingredient::{
        entities::{IngredientRecord, SafetyLevel},
        helpers::{capitalize_first, split_tokens},
        ports::IngredientService,
        reference_table::{ReferenceEntry, ReferenceTable},
        value_objects::{AnalysisSummary, AnalyzeIngredientsInput, IngredientAnalysis},
    },
    product::ports::{ProductExtractor, ProductSearchClient},
};

/// Classifies every token of `text` against `table`.
///
/// One record per non-empty token, in input order. Tokens without a match get
/// the unknown profile.
pub fn analyze_with_table(table: &ReferenceTable, text: &str) -> Vec<IngredientRecord> {
    split_tokens(text)
        .map(|token| {
            let name = capitalize_first(&token);
            match table.find(&token) {
                Some(entry) => IngredientRecord::new(name, &entry.profile, Some(entry.key.clone())),
                None => IngredientRecord::new(name, ReferenceTable::unknown_profile(), None),
            }
        })
        .collect()
}

/// [`analyze_with_table`] against the built-in reference table.
pub fn analyze_ingredients(text: &str) -> Vec<IngredientRecord> {
    analyze_with_table(&ReferenceTable::builtin(), text)
}

pub fn summarize(records: &[IngredientRecord]) -> AnalysisSummary {
    records
        .iter()
        .fold(AnalysisSummary::default(), |mut summary, record| {
            summary.total += 1;
            match record.safety_level {
                SafetyLevel::LowConcern => summary.low_concern += 1,
                SafetyLevel::ModerateConcern => summary.moderate_concern += 1,
                SafetyLevel::HighConcern => summary.high_concern += 1,
            }
            if !record.is_known() {
                summary.unknown += 1;
            }
            summary.highest_score = summary.highest_score.max(Some(record.ewg_score));
            summary
        })
}

impl<S, E> IngredientService for Service<S, E>
where
    S: ProductSearchClient,
    E: ProductExtractor,
{
    #[instrument(skip_all, fields(text_len = input.text.len()))]
    fn analyze_ingredients(&self, input: AnalyzeIngredientsInput) -> IngredientAnalysis {
        let ingredients = analyze_with_table(&self.reference_table, &input.text);
        let summary = summarize(&ingredients);

        debug!(
            total = summary.total,
            high_concern = summary.high_concern,
            unknown = summary.unknown,
            "ingredients analyzed"
        );

        IngredientAnalysis {
            ingredients,
            summary,
        }
    }

    fn reference_entries(&self) -> Vec<ReferenceEntry> {
        self.reference_table.entries().to_vec()
    }
}
