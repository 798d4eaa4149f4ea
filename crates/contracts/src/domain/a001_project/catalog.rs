use super::aggregate::{ExtendedDetail, ProjectId, ProjectRecord};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Встроенный набор данных каталога
const EMBEDDED_CATALOG: &str = include_str!("seed.json");

/// Ошибки каталога проектов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Обычная ситуация (устаревшая ссылка на проект), не сбой
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Project id must be positive")]
    InvalidId,

    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),

    #[error("Project {0} has an empty title")]
    EmptyTitle(ProjectId),

    #[error("Invalid detail key '{0}'")]
    InvalidDetailKey(String),
}

/// Формат встроенного JSON документа
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    projects: Vec<ProjectRecord>,
    #[serde(default)]
    details: HashMap<String, ExtendedDetail>,
}

/// Каталог проектов: неизменяемый после загрузки
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<ProjectRecord>,
    index: HashMap<ProjectId, usize>,
    details: HashMap<ProjectId, ExtendedDetail>,
}

impl CatalogStore {
    /// Собрать каталог из записей и расширенных описаний.
    ///
    /// Порядок записей сохраняется и является порядком отображения.
    /// Описания без соответствующей записи допускаются и просто недостижимы.
    pub fn from_parts(
        records: Vec<ProjectRecord>,
        details: HashMap<ProjectId, ExtendedDetail>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            if record.id.value() == 0 {
                return Err(CatalogError::InvalidId);
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(record.id));
            }
            if index.insert(record.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        let orphaned = details.keys().filter(|id| !index.contains_key(id)).count();
        if orphaned > 0 {
            log::debug!("catalog: {} detail entries have no matching project", orphaned);
        }

        Ok(Self {
            records,
            index,
            details,
        })
    }

    /// Разобрать каталог из JSON документа `{ "projects": [...], "details": {...} }`
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

        let mut details = HashMap::with_capacity(doc.details.len());
        for (key, detail) in doc.details {
            let id = ProjectId::from_string(&key)
                .map_err(|_| CatalogError::InvalidDetailKey(key.clone()))?;
            details.insert(id, detail);
        }

        Self::from_parts(doc.projects, details)
    }

    /// Каталог, встроенный в сборку
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Все проекты в порядке добавления
    pub fn get_all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Проект по ID
    pub fn get_by_id(&self, id: ProjectId) -> Result<&ProjectRecord, CatalogError> {
        self.index
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(CatalogError::NotFound(id))
    }

    /// Расширенное описание; для отсутствующих записей пустые списки
    pub fn detail_for(&self, id: ProjectId) -> ExtendedDetail {
        self.details.get(&id).cloned().unwrap_or_default()
    }

    /// Уникальные категории в порядке первого появления
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(record.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str, category: &str) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            title: title.to_string(),
            category: category.to_string(),
            description: String::new(),
            image_ref: format!("./assets/images/{}.jpg", id),
            featured: false,
            live_url: "#".to_string(),
            source_url: "#".to_string(),
        }
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = CatalogStore::embedded().unwrap();
        assert_eq!(catalog.len(), 9);
        let ids: Vec<u32> = catalog.get_all().iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
        assert_eq!(catalog.categories(), vec!["automation", "webdev"]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = CatalogStore::embedded().unwrap();
        assert_eq!(
            catalog.get_by_id(ProjectId(3)).unwrap().title,
            "Smiley Food App"
        );
        assert_eq!(
            catalog.get_by_id(ProjectId(42)),
            Err(CatalogError::NotFound(ProjectId(42)))
        );
    }

    #[test]
    fn test_detail_defaults_to_empty() {
        let catalog =
            CatalogStore::from_parts(vec![record(1, "One", "webdev")], HashMap::new()).unwrap();
        assert!(catalog.detail_for(ProjectId(1)).is_empty());

        let embedded = CatalogStore::embedded().unwrap();
        let detail = embedded.detail_for(ProjectId(9));
        assert_eq!(detail.features.len(), 5);
        assert_eq!(detail.tech_stack[0], "HTML5");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = CatalogStore::from_parts(
            vec![record(1, "One", "webdev"), record(1, "Again", "automation")],
            HashMap::new(),
        );
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId(ProjectId(1)));
    }

    #[test]
    fn test_rejects_zero_id_and_blank_title() {
        let zero = CatalogStore::from_parts(vec![record(0, "Zero", "webdev")], HashMap::new());
        assert_eq!(zero.unwrap_err(), CatalogError::InvalidId);

        let blank = CatalogStore::from_parts(vec![record(2, "  ", "webdev")], HashMap::new());
        assert_eq!(blank.unwrap_err(), CatalogError::EmptyTitle(ProjectId(2)));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            CatalogStore::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));

        let bad_key = r#"{ "projects": [], "details": { "x": { "features": [] } } }"#;
        assert_eq!(
            CatalogStore::from_json(bad_key).unwrap_err(),
            CatalogError::InvalidDetailKey("x".to_string())
        );
    }

    #[test]
    fn test_orphaned_details_are_tolerated() {
        let json = r#"{
            "projects": [
                { "id": 5, "title": "Five", "category": "webdev", "description": "", "image": "" }
            ],
            "details": { "6": { "features": ["unused"], "techStack": [] } }
        }"#;
        let catalog = CatalogStore::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.detail_for(ProjectId(5)).is_empty());
        assert_eq!(catalog.detail_for(ProjectId(6)).features, vec!["unused"]);
    }
}
