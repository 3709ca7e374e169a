//! Allocation models for portfolio breakdown by taxonomy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::segments::ChartEntry;

/// Allocation breakdown for a single category within a taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAllocation {
    /// Category ID (e.g. "EQUITY", "45")
    pub category_id: String,
    /// Display name of the category
    pub category_name: String,
    /// Total value in base currency
    pub value: Decimal,
    /// Percentage of total portfolio (0-100), as reported by the backend
    #[serde(default)]
    pub percentage: Decimal,
}

/// Allocation breakdown for a single taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyAllocation {
    /// Taxonomy ID (e.g. "asset_classes", "industries_gics")
    pub taxonomy_id: String,
    /// Display name of the taxonomy
    pub taxonomy_name: String,
    pub categories: Vec<CategoryAllocation>,
}

impl TaxonomyAllocation {
    /// Creates an empty allocation for a taxonomy.
    pub fn empty(taxonomy_id: &str, taxonomy_name: &str) -> Self {
        Self {
            taxonomy_id: taxonomy_id.to_string(),
            taxonomy_name: taxonomy_name.to_string(),
            categories: Vec::new(),
        }
    }

    /// Orders categories by value descending; ties keep their order.
    pub fn sort_by_value(&mut self) {
        self.categories.sort_by(|a, b| b.value.cmp(&a.value));
    }

    /// Chart entries in category order, skipping non-positive values.
    pub fn to_chart_entries(&self) -> Vec<ChartEntry> {
        self.categories
            .iter()
            .filter(|c| c.value > Decimal::ZERO)
            .map(|c| ChartEntry::new(c.category_name.clone(), c.value))
            .collect()
    }

    pub fn total_value(&self) -> Decimal {
        self.categories.iter().map(|c| c.value).sum()
    }
}
