// SPDX-License-Identifier: MPL-2.0
//! Single-select category filter over a fixed collection.

use std::fmt;

/// A filter choice. `All` is implicit and never part of the item taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns true if an item tagged `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == category,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str("*"),
            Category::Named(name) => f.write_str(name),
        }
    }
}

/// Items that carry a category tag.
pub trait Categorized {
    fn category(&self) -> &str;
}

/// Filter state. The item collection is passed in on each query, so the
/// projection is always recomputed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTabs {
    categories: Vec<String>,
    active: Category,
    show_all_tab: bool,
}

impl FilterTabs {
    /// Builds the tab strip from the distinct categories of `items`, in
    /// first-seen order, with `All` active.
    #[must_use]
    pub fn new<T: Categorized>(items: &[T]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for item in items {
            if !categories.iter().any(|c| c == item.category()) {
                categories.push(item.category().to_string());
            }
        }
        Self {
            categories,
            active: Category::All,
            show_all_tab: true,
        }
    }

    /// Uses an explicit category order (e.g. declared service categories).
    #[must_use]
    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            categories,
            active: Category::All,
            show_all_tab: true,
        }
    }

    /// Hides the `All` tab and activates the first category.
    #[must_use]
    pub fn without_all_tab(mut self) -> Self {
        self.show_all_tab = false;
        if let Some(first) = self.categories.first() {
            self.active = Category::Named(first.clone());
        }
        self
    }

    #[must_use]
    pub fn active(&self) -> &Category {
        &self.active
    }

    #[must_use]
    pub fn show_all_tab(&self) -> bool {
        self.show_all_tab
    }

    pub fn select(&mut self, category: Category) {
        if self.active != category {
            log::debug!("filter selected: {category}");
        }
        self.active = category;
    }

    /// Returns to the default tab.
    pub fn reset(&mut self) {
        if self.show_all_tab {
            self.select(Category::All);
        } else if let Some(first) = self.categories.first().cloned() {
            self.select(Category::Named(first));
        }
    }

    /// Tabs in display order, starting with `All` when shown.
    #[must_use]
    pub fn tabs(&self) -> Vec<Category> {
        let named = self.categories.iter().cloned().map(Category::Named);
        if self.show_all_tab {
            std::iter::once(Category::All).chain(named).collect()
        } else {
            named.collect()
        }
    }

    /// Items passing the active filter, in source order.
    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.active.matches(item.category()))
            .collect()
    }

    /// Returns true when the active filter leaves nothing to show.
    #[must_use]
    pub fn is_empty_for<T: Categorized>(&self, items: &[T]) -> bool {
        !items.iter().any(|item| self.active.matches(item.category()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        name: &'static str,
        category: &'static str,
    }

    impl Categorized for Item {
        fn category(&self) -> &str {
            self.category
        }
    }

    fn shelf() -> Vec<Item> {
        vec![
            Item { name: "a", category: "שמפו" },
            Item { name: "b", category: "מרכך" },
            Item { name: "c", category: "שמפו" },
            Item { name: "d", category: "עיצוב" },
        ]
    }

    #[test]
    fn tabs_follow_first_seen_order() {
        let tabs = FilterTabs::new(&shelf());
        assert_eq!(
            tabs.tabs(),
            vec![
                Category::All,
                Category::named("שמפו"),
                Category::named("מרכך"),
                Category::named("עיצוב"),
            ]
        );
    }

    #[test]
    fn projection_matches_category() {
        let items = shelf();
        let mut filter = FilterTabs::new(&items);
        assert_eq!(filter.visible(&items).len(), items.len());

        for tab in filter.tabs() {
            filter.select(tab.clone());
            let expected: Vec<&Item> = items
                .iter()
                .filter(|item| tab == Category::All || tab == Category::named(item.category))
                .collect();
            assert_eq!(filter.visible(&items), expected);
        }
    }

    #[test]
    fn unknown_category_yields_empty_and_reset_restores() {
        let items = shelf();
        let mut filter = FilterTabs::new(&items);
        filter.select(Category::named("טיפוח"));
        assert!(filter.visible(&items).is_empty());
        assert!(filter.is_empty_for(&items));

        filter.reset();
        assert_eq!(filter.active(), &Category::All);
        assert!(!filter.is_empty_for(&items));
    }

    #[test]
    fn without_all_tab_starts_on_first_category() {
        let filter = FilterTabs::with_categories(vec!["men".into(), "women".into()])
            .without_all_tab();
        assert_eq!(filter.active(), &Category::named("men"));
        assert_eq!(filter.tabs().len(), 2);
    }

    #[test]
    fn visible_reflects_source_changes() {
        let mut items = shelf();
        let filter = FilterTabs::new(&items);
        items.push(Item { name: "e", category: "מרכך" });
        assert_eq!(filter.visible(&items).len(), 5);
    }
}
