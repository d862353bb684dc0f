// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use expense_tracker::application::{EntryForm, Session, SessionConfig};
use expense_tracker::domain::{Category, CategoryChoice, Cents};

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create a session whose form defaults to a fixed day
pub fn test_session() -> Session {
    Session::new(SessionConfig {
        today: parse_date("2024-01-05"),
        ..SessionConfig::default()
    })
}

/// Helper to build a filled-in form
pub fn form(
    date: &str,
    category: impl Into<CategoryChoice>,
    description: &str,
    amount_cents: Cents,
) -> EntryForm {
    EntryForm {
        date: parse_date(date),
        category: category.into(),
        description: description.to_string(),
        amount_cents,
    }
}

/// Helper to submit a form that is expected to pass validation
pub fn add(session: &mut Session, category: Category, description: &str, amount_cents: Cents) {
    let outcome = session.submit(form("2024-01-05", category, description, amount_cents));
    assert!(outcome.is_added(), "rejected: {:?}", outcome);
}
