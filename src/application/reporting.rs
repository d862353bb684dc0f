use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategorySummary, Cents, Ledger};

/// Aggregates shown under the expense table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: Cents,
    pub record_count: usize,
    pub categories: Vec<CategorySummary>,
}

impl Summary {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            total: ledger.total(),
            record_count: ledger.len(),
            categories: ledger.category_summaries(),
        }
    }

    /// Category totals sorted by category, the order the bar chart uses.
    pub fn chart_bars(&self) -> Vec<(Category, Cents)> {
        let mut bars: Vec<(Category, Cents)> = self
            .categories
            .iter()
            .map(|c| (c.category, c.total))
            .collect();
        bars.sort_by_key(|(category, _)| *category);
        bars
    }
}
