//! Built-in cosmetic ingredient reference data.
//!
//! Scores loosely follow the EWG Skin Deep 1-10 hazard convention and are
//! illustrative only. Entries are matched in insertion order; the first key that
//! contains the token, or that the token contains, wins.

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::{IngredientProfile, SafetyLevel};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceEntry {
    /// Lowercase ingredient name.
    pub key: String,
    #[serde(flatten)]
    pub profile: IngredientProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

static BUILTIN: LazyLock<Arc<ReferenceTable>> =
    LazyLock::new(|| Arc::new(ReferenceTable::new(builtin_entries())));

static UNKNOWN: LazyLock<IngredientProfile> = LazyLock::new(|| {
    IngredientProfile::new(
        "Unknown",
        3,
        SafetyLevel::ModerateConcern,
        "Limited safety data available",
        "Various applications",
    )
});

impl ReferenceTable {
    /// Builds a table from `(key, profile)` pairs, keeping their order.
    ///
    /// Keys are trimmed and lower-cased. Blank keys are dropped since they would
    /// match every token.
    pub fn new(entries: impl IntoIterator<Item = (String, IngredientProfile)>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|(key, profile)| {
                let key = key.trim().to_lowercase();
                (!key.is_empty()).then_some(ReferenceEntry { key, profile })
            })
            .collect();

        Self { entries }
    }

    /// Shared handle to the built-in table, built on first use.
    pub fn builtin() -> Arc<ReferenceTable> {
        Arc::clone(&BUILTIN)
    }

    /// Profile assigned to tokens no entry matches.
    pub fn unknown_profile() -> &'static IngredientProfile {
        &UNKNOWN
    }

    /// First entry whose key contains `token` or is contained in it.
    ///
    /// `token` is expected to be lower-cased already.
    pub fn find(&self, token: &str) -> Option<&ReferenceEntry> {
        if token.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| token.contains(entry.key.as_str()) || entry.key.contains(token))
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn builtin_entries() -> Vec<(String, IngredientProfile)> {
    use SafetyLevel::{HighConcern, LowConcern, ModerateConcern};

    let rows: [(&str, IngredientProfile); 17] = [
        (
            "water",
            IngredientProfile::new(
                "Solvent",
                1,
                LowConcern,
                "",
                "Base ingredient in most products",
            ),
        ),
        (
            "sodium lauryl sulfate",
            IngredientProfile::new(
                "Surfactant, Cleansing Agent",
                3,
                ModerateConcern,
                "Irritation (skin, eyes, or lungs), Organ system toxicity, Contamination concerns",
                "Foaming agent in cleansers, shampoos",
            ),
        ),
        (
            "methylparaben",
            IngredientProfile::new(
                "Preservative",
                4,
                ModerateConcern,
                "Endocrine disruption, Allergies/immunotoxicity",
                "Preservative in cosmetics",
            ),
        ),
        (
            "propylparaben",
            IngredientProfile::new(
                "Preservative",
                7,
                HighConcern,
                "Endocrine disruption, Developmental/reproductive toxicity",
                "Preservative in cosmetics",
            ),
        ),
        (
            "fragrance",
            IngredientProfile::new(
                "Fragrance",
                8,
                HighConcern,
                "Allergies/immunotoxicity, Irritation, Non-reproductive organ system toxicity",
                "Scent in personal care products",
            ),
        ),
        (
            "oxybenzone",
            IngredientProfile::new(
                "UV Filter",
                8,
                HighConcern,
                "Endocrine disruption, Allergies/immunotoxicity, Biochemical or cellular level changes",
                "Sunscreen agent",
            ),
        ),
        (
            "glycerin",
            IngredientProfile::new(
                "Humectant",
                1,
                LowConcern,
                "",
                "Moisturizing agent in skin care",
            ),
        ),
        (
            "tocopherol",
            IngredientProfile::new(
                "Antioxidant",
                1,
                LowConcern,
                "",
                "Vitamin E, preserves product freshness",
            ),
        ),
        (
            "sodium benzoate",
            IngredientProfile::new(
                "Preservative",
                3,
                ModerateConcern,
                "Organ system toxicity, Multiple additive exposure sources",
                "Preservative in food and cosmetics",
            ),
        ),
        (
            "phenoxyethanol",
            IngredientProfile::new(
                "Preservative",
                4,
                ModerateConcern,
                "Irritation, Occupational hazards, Organ system toxicity",
                "Common preservative in cosmetics",
            ),
        ),
        (
            "retinyl palmitate",
            IngredientProfile::new(
                "Anti-aging",
                9,
                HighConcern,
                "Biochemical or cellular level changes, Developmental/reproductive toxicity, Cancer",
                "Form of Vitamin A used in anti-aging products",
            ),
        ),
        (
            "titanium dioxide",
            IngredientProfile::new(
                "UV filter, Colorant",
                3,
                ModerateConcern,
                "Organ system toxicity, Cancer (when airborne)",
                "Sunscreen ingredient, colorant in makeup",
            ),
        ),
        (
            "butylated hydroxyanisole",
            IngredientProfile::new(
                "Preservative",
                7,
                HighConcern,
                "Cancer, Endocrine disruption, Organ system toxicity",
                "Preservative in cosmetics and personal care products",
            ),
        ),
        (
            "triclosan",
            IngredientProfile::new(
                "Antimicrobial",
                7,
                HighConcern,
                "Endocrine disruption, Ecotoxicology, Organ system toxicity",
                "Antibacterial agent in personal care products",
            ),
        ),
        (
            "toluene",
            IngredientProfile::new(
                "Solvent",
                10,
                HighConcern,
                "Developmental/reproductive toxicity, Organ system toxicity, Multiple exposure sources",
                "Solvent in nail products",
            ),
        ),
        (
            "hydroquinone",
            IngredientProfile::new(
                "Skin Lightener",
                8,
                HighConcern,
                "Cancer, Organ system toxicity, Skin irritation",
                "Skin lightening agent",
            ),
        ),
        (
            "formaldehyde",
            IngredientProfile::new(
                "Preservative",
                10,
                HighConcern,
                "Cancer, Allergies/immunotoxicity, Organ system toxicity",
                "Preservative in personal care products",
            ),
        ),
    ];

    rows.into_iter()
        .map(|(key, profile)| (key.to_string(), profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keeps_insertion_order() {
        let table = ReferenceTable::builtin();
        let keys: Vec<&str> = table.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(table.len(), 17);
        assert_eq!(keys.first(), Some(&"water"));
        assert_eq!(keys.last(), Some(&"formaldehyde"));
        assert!(
            keys.iter().position(|k| *k == "sodium lauryl sulfate")
                < keys.iter().position(|k| *k == "sodium benzoate")
        );
    }

    #[test]
    fn test_find_first_match_wins() {
        let table = ReferenceTable::builtin();
        let entry = table.find("sodium").unwrap();
        assert_eq!(entry.key, "sodium lauryl sulfate");
    }

    #[test]
    fn test_find_token_contains_key() {
        let table = ReferenceTable::builtin();
        let entry = table.find("aqua (water)").unwrap();
        assert_eq!(entry.key, "water");
    }

    #[test]
    fn test_find_no_match() {
        let table = ReferenceTable::builtin();
        assert!(table.find("unobtainium").is_none());
        assert!(table.find("").is_none());
    }

    #[test]
    fn test_new_normalizes_and_drops_blank_keys() {
        let profile = ReferenceTable::unknown_profile().clone();
        let table = ReferenceTable::new(vec![
            ("  Aloe Vera ".to_string(), profile.clone()),
            ("   ".to_string(), profile),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].key, "aloe vera");
    }

    #[test]
    fn test_unknown_profile() {
        let unknown = ReferenceTable::unknown_profile();
        assert_eq!(unknown.function, "Unknown");
        assert_eq!(unknown.ewg_score, 3);
        assert_eq!(unknown.safety_level, SafetyLevel::ModerateConcern);
        assert_eq!(unknown.reason_for_concern, "Limited safety data available");
    }
}
