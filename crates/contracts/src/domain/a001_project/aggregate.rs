use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор проекта в каталоге (положительное целое)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid project id '{}': {}", s, e))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// Значение ссылки "ссылки нет"
pub const NO_LINK: &str = "#";

/// Проверка, что ссылка реальная (не заглушка и не пустая строка)
pub fn is_real_link(href: &str) -> bool {
    let href = href.trim();
    !href.is_empty() && href != NO_LINK
}

/// Проект портфолио
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(rename = "image", alias = "imageRef")]
    pub image_ref: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "liveUrl", default = "no_link")]
    pub live_url: String,
    #[serde(rename = "sourceUrl", alias = "githubUrl", default = "no_link")]
    pub source_url: String,
}

fn no_link() -> String {
    NO_LINK.to_string()
}

impl ProjectRecord {
    pub fn has_live_link(&self) -> bool {
        is_real_link(&self.live_url)
    }

    pub fn has_source_link(&self) -> bool {
        is_real_link(&self.source_url)
    }
}

/// Расширенное описание проекта для модального окна
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedDetail {
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(rename = "techStack", default)]
    pub tech_stack: Vec<String>,
}

impl ExtendedDetail {
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.tech_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_parse() {
        assert_eq!(ProjectId::from_string("7"), Ok(ProjectId(7)));
        assert_eq!(ProjectId::from_string(" 12 "), Ok(ProjectId(12)));
        assert!(ProjectId::from_string("abc").is_err());
        assert!(ProjectId::from_string("-1").is_err());
    }

    #[test]
    fn test_link_sentinel() {
        assert!(!is_real_link("#"));
        assert!(!is_real_link(""));
        assert!(!is_real_link("  "));
        assert!(is_real_link("https://github.com/Diwakar-odds"));
    }

    #[test]
    fn test_record_deserializes_github_alias() {
        let json = r##"{
            "id": 4,
            "title": "PDF Editor",
            "category": "webdev",
            "description": "Annotations",
            "image": "./assets/images/pdf-editor.jpg",
            "liveUrl": "#",
            "githubUrl": "https://github.com/Diwakar-odds/Pdf_editor"
        }"##;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ProjectId(4));
        assert!(!record.featured);
        assert!(!record.has_live_link());
        assert!(record.has_source_link());
    }
}
