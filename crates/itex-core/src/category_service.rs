use itex_domain::{slugify, Category, CategoryId};
use tracing::debug;

use crate::{time::Clock, BudgetService, CoreError, CoreResult, DashboardState};

/// Add and rename commands for categories. Categories are never deleted.
pub struct CategoryService;

impl CategoryService {
    /// Appends a category and gives it a zero budget entry for every known year.
    pub fn add(
        state: &DashboardState,
        name: &str,
        clock: &dyn Clock,
    ) -> CoreResult<(DashboardState, CategoryId)> {
        let name = Self::validate_name(state.categories(), name, None)?;
        let id = Self::next_id(state, &name, clock);

        let mut categories = state.categories().to_vec();
        categories.push(Category::new(id.clone(), name.clone()));
        let budget = state
            .budget()
            .with_row(&id, BudgetService::zero_row(state.budget()));

        debug!(id = %id, name = %name, "category added");
        Ok((
            state.with_categories(categories).with_budget(budget),
            id,
        ))
    }

    /// Changes the display name only; id-keyed references keep resolving.
    pub fn rename(state: &DashboardState, id: &CategoryId, name: &str) -> CoreResult<DashboardState> {
        let position = state
            .categories()
            .iter()
            .position(|category| &category.id == id)
            .ok_or_else(|| CoreError::CategoryNotFound(id.clone()))?;
        let name = Self::validate_name(state.categories(), name, Some(id))?;

        let mut categories = state.categories().to_vec();
        categories[position] = categories[position].renamed(name.clone());
        debug!(id = %id, name = %name, "category renamed");
        Ok(state.with_categories(categories))
    }

    pub fn list(state: &DashboardState) -> &[Category] {
        state.categories()
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|category| category.name_matches(name))
    }

    fn validate_name(
        categories: &[Category],
        name: &str,
        except: Option<&CategoryId>,
    ) -> CoreResult<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation("category name is required".into()));
        }
        let clash = categories
            .iter()
            .filter(|category| Some(&category.id) != except)
            .any(|category| category.name_matches(trimmed));
        if clash {
            return Err(CoreError::DuplicateCategory(trimmed.to_string()));
        }
        Ok(trimmed.to_string())
    }

    fn next_id(state: &DashboardState, name: &str, clock: &dyn Clock) -> CategoryId {
        let slug = slugify(name);
        let mut stamp = clock.now().timestamp_millis();
        loop {
            let id = CategoryId::new(format!("{slug}-{stamp}"));
            if state.category(&id).is_none() {
                return id;
            }
            stamp += 1;
        }
    }
}
