//! Spending category registry
//!
//! Categories form a closed set with stable display labels. Filter selection
//! is modeled by a separate type so the wildcard "All" never appears on a
//! stored record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The display label reserved for "no category filter" in selectors
pub const WILDCARD_LABEL: &str = "All";

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Entertainment,
    Transportation,
}

impl Category {
    /// The closed set of categories, in declaration order
    pub const ALL: [Category; 3] = [
        Category::Food,
        Category::Entertainment,
        Category::Transportation,
    ];

    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Entertainment => "Entertainment",
            Self::Transportation => "Transportation",
        }
    }

    /// Look up a category by its display label
    ///
    /// Returns `None` for unrecognized strings, including the wildcard "All".
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// The category labels augmented with the wildcard "All", for
    /// populating a filter selector
    pub fn filter_labels() -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Self::ALL.iter().map(|c| c.label()).collect();
        labels.push(WILDCARD_LABEL);
        labels
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category selection for a query: either a concrete category or no filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Retain every record
    #[default]
    All,
    /// Retain only records with this category
    Only(Category),
}

impl CategoryFilter {
    /// Build a filter from a selector's display label
    ///
    /// Labels that do not name a concrete category (the wildcard "All",
    /// or anything unrecognized) resolve to no filter.
    pub fn from_label(label: &str) -> Self {
        match Category::from_label(label) {
            Some(category) => Self::Only(category),
            None => Self::All,
        }
    }

    /// Check whether a record's category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", WILDCARD_LABEL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}
