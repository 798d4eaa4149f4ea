use super::aggregate::ProjectRecord;
use std::fmt;

/// Токен фильтра "показать всё"
pub const ALL_CATEGORIES: &str = "all";

/// Выбранный фильтр категории
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Разбор токена. Сравнение с "all" и категориями чувствительно к регистру.
    pub fn parse(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(token.to_string())
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(c) => c.as_str(),
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_category(&record.category)
    }

    pub fn matches_category(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }

    /// Отфильтровать записи, сохраняя исходный порядок
    pub fn apply(&self, records: &[ProjectRecord]) -> FilterOutcome {
        let records: Vec<ProjectRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        FilterOutcome { records }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Результат фильтрации. Пустой результат не ошибка.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    pub records: Vec<ProjectRecord>,
}

impl FilterOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn into_records(self) -> Vec<ProjectRecord> {
        self.records
    }
}

/// Видимые записи для токена категории
pub fn filter(records: &[ProjectRecord], category_token: &str) -> Vec<ProjectRecord> {
    CategoryFilter::parse(category_token)
        .apply(records)
        .into_records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_project::{CatalogStore, ProjectId};

    fn ids(records: &[ProjectRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_all_returns_full_catalog() {
        let catalog = CatalogStore::embedded().unwrap();
        let all = filter(catalog.get_all(), "all");
        assert_eq!(all, catalog.get_all().to_vec());
    }

    #[test]
    fn test_webdev_scenario() {
        let catalog = CatalogStore::embedded().unwrap();
        let webdev = filter(catalog.get_all(), "webdev");
        assert_eq!(ids(&webdev), vec![3, 4, 5, 6, 7, 9]);
        assert!(webdev.iter().any(|r| r.id == ProjectId(3)));
        assert!(webdev.iter().all(|r| r.category != "automation"));
    }

    #[test]
    fn test_case_sensitive_and_unknown() {
        let catalog = CatalogStore::embedded().unwrap();
        assert!(filter(catalog.get_all(), "WebDev").is_empty());
        assert!(filter(catalog.get_all(), "ALL").is_empty());
        assert!(filter(catalog.get_all(), "design").is_empty());
        assert!(CategoryFilter::parse("design")
            .apply(catalog.get_all())
            .is_empty());
    }

    #[test]
    fn test_token_roundtrip() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("automation").as_token(),
            "automation"
        );
        assert_eq!(CategoryFilter::default().to_string(), "all");
    }
}
