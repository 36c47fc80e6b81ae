//! Category filtering for the project and blog grids.
//!
//! The toggle set is derived from the loaded items: distinct categories in
//! first-seen order, with a synthetic `"all"` entry in front. Items without a
//! category are grouped under `"other"`.

use crate::config::{CategoryConfig, UnknownCategoryPolicy};
use crate::text;
use crate::types::Categorized;

/// Synthetic category selecting every item.
pub const ALL: &str = "all";

/// Distinct categories in first-seen order, `"all"` first.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut seen = vec![ALL.to_string()];
    for item in items {
        let category = item.category();
        if !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Items in the selected category, original order preserved.
///
/// `"all"` returns every item unchanged.
pub fn filter_items<'a, T: Categorized>(items: &'a [T], selected: &str) -> Vec<&'a T> {
    if selected == ALL {
        return items.iter().collect();
    }
    items.iter().filter(|i| i.category() == selected).collect()
}

/// Display label for a category.
///
/// Looks the raw value up in the configured dictionary; unknown values follow
/// the configured [`UnknownCategoryPolicy`].
pub fn category_label(category: &str, config: &CategoryConfig) -> String {
    if let Some(label) = config.labels.get(category) {
        return label.clone();
    }
    match config.unknown {
        UnknownCategoryPolicy::Literal => category.to_string(),
        UnknownCategoryPolicy::TitleCase => text::title_case(category),
    }
}

/// Exclusive toggle state over a fixed set of categories.
#[derive(Debug, Clone)]
pub struct FilterState {
    categories: Vec<String>,
    active: usize,
}

impl FilterState {
    /// Build the toggle set for `items` with `"all"` active.
    pub fn new<T: Categorized>(items: &[T]) -> Self {
        Self {
            categories: categories(items),
            active: 0,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> &str {
        &self.categories[self.active]
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active() == category
    }

    /// Make `category` the only active toggle.
    ///
    /// Returns `false` and leaves the state untouched for a category that has
    /// no toggle.
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Items visible under the active toggle.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, self.active())
    }
}
