//! Domain types representing spending categories.

use serde::{Deserialize, Serialize};

use crate::common::*;

/// A user-managed spending bucket. Linkage from transactions and budget rows
/// is by `id`, so `name` can change freely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns a copy carrying `name`, keeping the identifier.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: name.into(),
        }
    }

    /// Case-insensitive, whitespace-trimmed name comparison.
    pub fn name_matches(&self, candidate: &str) -> bool {
        self.name.trim().to_lowercase() == candidate.trim().to_lowercase()
    }
}

impl Identifiable for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Resolves the display name for `id`, falling back to the raw identifier
/// when the category no longer exists.
pub fn category_name<'a>(categories: &'a [Category], id: &'a CategoryId) -> &'a str {
    categories
        .iter()
        .find(|category| category.id() == id)
        .map(NamedEntity::name)
        .unwrap_or_else(|| id.as_str())
}
