use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Category, Cents, ExpenseRecord};

/// The session's expense rows, in insertion order.
///
/// Append-only: there is no removal or editing, and duplicate rows are allowed.
/// Aggregates are recomputed from the rows on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

/// Per-category aggregate used for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Cents,
    pub count: usize,
    pub percentage: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Sum of every amount; 0 for an empty ledger. Saturates at `Cents::MAX`.
    pub fn total(&self) -> Cents {
        self.records
            .iter()
            .fold(0, |total: Cents, r| total.saturating_add(r.amount_cents))
    }

    /// Sum of amounts per category, restricted to categories that occur.
    pub fn by_category(&self) -> BTreeMap<Category, Cents> {
        let mut totals: BTreeMap<Category, Cents> = BTreeMap::new();
        for record in &self.records {
            let total = totals.entry(record.category).or_insert(0);
            *total = total.saturating_add(record.amount_cents);
        }
        totals
    }

    /// Category aggregates sorted by descending total, ties broken by category.
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        let grand_total = self.total();
        let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category).or_insert(0) += 1;
        }

        let mut summaries: Vec<CategorySummary> = self
            .by_category()
            .into_iter()
            .map(|(category, total)| CategorySummary {
                category,
                total,
                count: counts.get(&category).copied().unwrap_or(0),
                percentage: if grand_total > 0 {
                    total as f64 / grand_total as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        summaries.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
        summaries
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The current snapshot, in ledger order.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }
}
