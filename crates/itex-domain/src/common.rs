//! Shared identifiers, traits, and calendar helpers for expense primitives.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar year used as the budget table's column key.
pub type Year = i32;

/// Number of quarter buckets in a calendar year.
pub const QUARTERS_PER_YEAR: usize = 4;

/// Exposes a stable identifier for entities held in the dashboard state.
pub trait Identifiable {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Stable identifier of a [`crate::Category`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CategoryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Unique identifier of a [`crate::Transaction`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Zero-based quarter (0..=3) that contains `date`.
pub fn quarter_of(date: NaiveDate) -> usize {
    (date.month0() / 3) as usize
}

/// Lowercases `name`, keeps ASCII alphanumerics and collapses every other run
/// of characters into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "category".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_buckets_follow_calendar_months() {
        let date = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap();
        assert_eq!(quarter_of(date(1)), 0);
        assert_eq!(quarter_of(date(3)), 0);
        assert_eq!(quarter_of(date(4)), 1);
        assert_eq!(quarter_of(date(9)), 2);
        assert_eq!(quarter_of(date(12)), 3);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("New Cat"), "new-cat");
        assert_eq!(slugify("  Cloud & SaaS  "), "cloud-saas");
        assert_eq!(slugify("R&D / Lab 2"), "r-d-lab-2");
        assert_eq!(slugify("!!!"), "category");
    }
}
