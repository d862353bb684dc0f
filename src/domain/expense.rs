use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Cents};

/// One expense row. Construct through `EntryForm::validate` so the
/// non-empty description and positive amount invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount_cents: Cents,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount_cents: Cents,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount_cents,
        }
    }
}
