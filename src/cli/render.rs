use crate::application::Summary;
use crate::domain::{ExpenseRecord, format_cents};

const BAR_WIDTH: i64 = 40;

/// Render records as a fixed-width table, in ledger order.
pub fn expense_table(records: &[ExpenseRecord]) -> String {
    let mut out = format!(
        "{:>4}  {:<10}  {:<10}  {:<30}  {:>12}\n",
        "#", "DATE", "CATEGORY", "DESCRIPTION", "AMOUNT"
    );
    out.push_str(&"-".repeat(74));
    out.push('\n');

    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<10}  {:<10}  {:<30}  {:>12}\n",
            index,
            record.date.format("%Y-%m-%d"),
            record.category,
            truncate(&record.description, 30),
            format_cents(record.amount_cents)
        ));
    }
    out
}

/// Render the total line followed by a horizontal bar per category.
pub fn summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut out = format!(
        "Total Spent: {} {}\n",
        currency_symbol,
        format_cents(summary.total)
    );

    let bars = summary.chart_bars();
    let max = bars.iter().map(|(_, total)| *total).max().unwrap_or(0);
    for (category, total) in bars {
        out.push_str(&format!(
            "{:<10} {:<width$} {:>12}\n",
            category.as_str(),
            "#".repeat(bar_length(total, max)),
            format_cents(total),
            width = BAR_WIDTH as usize
        ));
    }
    out
}

/// Bar length scaled to the largest total; any non-zero total gets at least one mark.
fn bar_length(total: i64, max: i64) -> usize {
    if total <= 0 || max <= 0 {
        return 0;
    }
    let scaled = (total * BAR_WIDTH + max - 1) / max;
    scaled.clamp(1, BAR_WIDTH) as usize
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}
