use contracts::domain::a001_project::{CatalogStore, CategoryFilter};
use leptos::prelude::*;

/// Состояние галереи: выбранная категория фильтра.
#[derive(Clone, Copy)]
pub struct ProjectListState {
    pub category: RwSignal<CategoryFilter>,
}

impl ProjectListState {
    pub fn new() -> Self {
        Self {
            category: RwSignal::new(CategoryFilter::All),
        }
    }

    pub fn select(&self, filter: CategoryFilter) {
        log::debug!("projects: filter '{}'", filter);
        self.category.set(filter);
    }

    pub fn is_selected(&self, filter: &CategoryFilter) -> bool {
        self.category.with(|current| current == filter)
    }

    /// Проходит ли категория текущий фильтр (tracked).
    pub fn shows_category(&self, category: &str) -> bool {
        self.category.with(|f| f.matches_category(category))
    }

    /// Ни одна карточка не проходит фильтр (tracked).
    pub fn is_empty_for(&self, catalog: &CatalogStore) -> bool {
        self.category.with(|f| f.apply(catalog.get_all()).is_empty())
    }
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Подпись кнопки фильтра для токена категории.
pub fn category_label(token: &str) -> String {
    match token {
        "all" => "All".to_string(),
        "webdev" => "Web Dev".to_string(),
        "automation" => "AI & Automation".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_selection() {
        let catalog = CatalogStore::embedded().unwrap();
        let state = ProjectListState::new();
        assert!(state.shows_category("automation"));
        assert!(!state.is_empty_for(&catalog));

        state.select(CategoryFilter::parse("webdev"));
        assert!(state.is_selected(&CategoryFilter::parse("webdev")));
        assert!(state.shows_category("webdev"));
        assert!(!state.shows_category("automation"));

        state.select(CategoryFilter::parse("design"));
        assert!(state.is_empty_for(&catalog));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("all"), "All");
        assert_eq!(category_label("webdev"), "Web Dev");
        assert_eq!(category_label("design"), "Design");
        assert_eq!(category_label(""), "");
    }
}
