use chrono::NaiveDate;
use std::fmt;

use crate::domain::{CategoryChoice, Cents, ExpenseRecord};

/// Why a submitted form was not appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarning {
    MissingCategory,
    ZeroAmount,
    EmptyDescription,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self {
            ValidationWarning::MissingCategory => "category",
            ValidationWarning::ZeroAmount => "amount",
            ValidationWarning::EmptyDescription => "description",
        };
        write!(f, "Please select a valid {} before submitting.", field)
    }
}

/// Raw contents of the entry form at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub date: NaiveDate,
    pub category: CategoryChoice,
    pub description: String,
    pub amount_cents: Cents,
}

impl EntryForm {
    /// An untouched form: today's date, "Select", no description, zero amount.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today,
            category: CategoryChoice::Unselected,
            description: String::new(),
            amount_cents: 0,
        }
    }

    /// Check every field independently and turn the form into a record.
    ///
    /// All three checks gate the append: a form with any warning yields
    /// no record, and each violated check contributes its own warning.
    pub fn validate(self) -> Result<ExpenseRecord, Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        if self.category.category().is_none() {
            warnings.push(ValidationWarning::MissingCategory);
        }
        if self.amount_cents == 0 {
            warnings.push(ValidationWarning::ZeroAmount);
        }
        if self.description.is_empty() {
            warnings.push(ValidationWarning::EmptyDescription);
        }

        match self.category.category() {
            Some(category) if warnings.is_empty() => Ok(ExpenseRecord {
                date: self.date,
                category,
                description: self.description,
                amount_cents: self.amount_cents,
            }),
            _ => Err(warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    fn form(category: CategoryChoice, description: &str, amount_cents: Cents) -> EntryForm {
        EntryForm {
            date: date(),
            category,
            description: description.to_string(),
            amount_cents,
        }
    }

    #[test]
    fn test_valid_form_produces_record() {
        let record = form(Category::Food.into(), "Lunch", 25000)
            .validate()
            .unwrap();
        assert_eq!(record, ExpenseRecord::new(date(), Category::Food, "Lunch", 25000));
    }

    #[test]
    fn test_each_check_gates_on_its_own() {
        assert_eq!(
            form(CategoryChoice::Unselected, "Lunch", 25000).validate(),
            Err(vec![ValidationWarning::MissingCategory])
        );
        assert_eq!(
            form(Category::Food.into(), "Lunch", 0).validate(),
            Err(vec![ValidationWarning::ZeroAmount])
        );
        assert_eq!(
            form(Category::Food.into(), "", 25000).validate(),
            Err(vec![ValidationWarning::EmptyDescription])
        );
    }

    #[test]
    fn test_blank_form_reports_every_violation() {
        assert_eq!(
            EntryForm::blank(date()).validate(),
            Err(vec![
                ValidationWarning::MissingCategory,
                ValidationWarning::ZeroAmount,
                ValidationWarning::EmptyDescription,
            ])
        );
    }

    #[test]
    fn test_whitespace_description_is_not_empty() {
        assert!(form(Category::Other.into(), " ", 100).validate().is_ok());
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(
            ValidationWarning::MissingCategory.to_string(),
            "Please select a valid category before submitting."
        );
        assert_eq!(
            ValidationWarning::ZeroAmount.to_string(),
            "Please select a valid amount before submitting."
        );
        assert_eq!(
            ValidationWarning::EmptyDescription.to_string(),
            "Please select a valid description before submitting."
        );
    }
}
