use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A concrete expense category. Only these values are ever stored in a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Health,
    Other,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// The category select box: either the "Select" placeholder or a real category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    #[default]
    Unselected,
    Selected(Category),
}

impl CategoryChoice {
    pub const SENTINEL: &'static str = "Select";

    /// Every option shown in the select box, placeholder first.
    pub fn options() -> impl Iterator<Item = CategoryChoice> {
        std::iter::once(CategoryChoice::Unselected)
            .chain(Category::ALL.into_iter().map(CategoryChoice::Selected))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryChoice::Unselected => Self::SENTINEL,
            CategoryChoice::Selected(category) => category.as_str(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            CategoryChoice::Unselected => None,
            CategoryChoice::Selected(category) => Some(*category),
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryChoice {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(Self::SENTINEL) {
            return Ok(CategoryChoice::Unselected);
        }
        s.parse().map(CategoryChoice::Selected)
    }
}

impl From<Category> for CategoryChoice {
    fn from(category: Category) -> Self {
        CategoryChoice::Selected(category)
    }
}
