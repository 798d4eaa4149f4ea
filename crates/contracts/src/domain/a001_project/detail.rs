//! Состояние модального окна с деталями проекта.
//!
//! `Closed -> Open(id) -> Closed`. Одновременно открыт максимум один проект,
//! повторный `open` заменяет открытый проект без промежуточного закрытия.

use super::aggregate::{ExtendedDetail, ProjectId, ProjectRecord};
use super::catalog::{CatalogError, CatalogStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Open(ProjectId),
}

/// Входящие события от UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// Клик по карточке
    Select(ProjectId),
    /// Кнопка закрытия
    CloseRequested,
    /// Escape
    Cancel,
    /// Клик по подложке вне контента
    OutsideClick,
    /// Клик внутри контента
    InsideClick,
}

/// Данные для отрисовки открытого окна
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub record: ProjectRecord,
    pub detail: ExtendedDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailView {
    state: DetailState,
    detail: ExtendedDetail,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DetailState::Open(_))
    }

    pub fn open_id(&self) -> Option<ProjectId> {
        match self.state {
            DetailState::Open(id) => Some(id),
            DetailState::Closed => None,
        }
    }

    /// Открыть проект. При `NotFound` состояние не меняется.
    pub fn open(&mut self, catalog: &CatalogStore, id: ProjectId) -> Result<(), CatalogError> {
        catalog.get_by_id(id)?;
        self.detail = catalog.detail_for(id);
        self.state = DetailState::Open(id);
        Ok(())
    }

    /// Закрыть окно. Идемпотентно.
    pub fn close(&mut self) {
        self.state = DetailState::Closed;
        self.detail = ExtendedDetail::default();
    }

    /// Единая точка обновления состояния из событий UI
    pub fn handle(&mut self, catalog: &CatalogStore, event: DetailEvent) {
        match event {
            DetailEvent::Select(id) => {
                if let Err(e) = self.open(catalog, id) {
                    log::warn!("detail view: {}", e);
                }
            }
            DetailEvent::CloseRequested | DetailEvent::Cancel | DetailEvent::OutsideClick => {
                self.close()
            }
            DetailEvent::InsideClick => {}
        }
    }

    /// Содержимое окна, если оно открыто
    pub fn panel(&self, catalog: &CatalogStore) -> Option<DetailPanel> {
        let id = self.open_id()?;
        let record = catalog.get_by_id(id).ok()?.clone();
        Some(DetailPanel {
            record,
            detail: self.detail.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogStore {
        CatalogStore::embedded().unwrap()
    }

    #[test]
    fn test_open_then_close() {
        let catalog = catalog();
        let mut view = DetailView::new();
        assert_eq!(view.state(), DetailState::Closed);

        view.open(&catalog, ProjectId(1)).unwrap();
        assert_eq!(view.state(), DetailState::Open(ProjectId(1)));

        view.close();
        assert_eq!(view.state(), DetailState::Closed);
        view.close();
        assert_eq!(view.state(), DetailState::Closed);
    }

    #[test]
    fn test_reopen_replaces_record() {
        let catalog = catalog();
        let mut view = DetailView::new();
        view.open(&catalog, ProjectId(1)).unwrap();
        view.open(&catalog, ProjectId(5)).unwrap();
        assert_eq!(view.state(), DetailState::Open(ProjectId(5)));

        let panel = view.panel(&catalog).unwrap();
        assert_eq!(panel.record.title, "Finance Track");
        assert!(panel.detail.tech_stack.contains(&"JWT".to_string()));
    }

    #[test]
    fn test_invalid_open_keeps_state() {
        let catalog = catalog();
        let mut view = DetailView::new();
        assert_eq!(
            view.open(&catalog, ProjectId(99)),
            Err(CatalogError::NotFound(ProjectId(99)))
        );
        assert_eq!(view.state(), DetailState::Closed);

        view.open(&catalog, ProjectId(2)).unwrap();
        let before = view.clone();
        assert!(view.open(&catalog, ProjectId(99)).is_err());
        assert_eq!(view, before);
    }

    #[test]
    fn test_events() {
        let catalog = catalog();
        let mut view = DetailView::new();

        view.handle(&catalog, DetailEvent::Select(ProjectId(3)));
        view.handle(&catalog, DetailEvent::InsideClick);
        assert_eq!(view.open_id(), Some(ProjectId(3)));

        view.handle(&catalog, DetailEvent::Cancel);
        assert!(!view.is_open());

        view.handle(&catalog, DetailEvent::Select(ProjectId(4)));
        view.handle(&catalog, DetailEvent::OutsideClick);
        assert!(!view.is_open());

        view.handle(&catalog, DetailEvent::Select(ProjectId(4)));
        view.handle(&catalog, DetailEvent::CloseRequested);
        assert!(view.panel(&catalog).is_none());

        view.handle(&catalog, DetailEvent::Select(ProjectId(0)));
        assert_eq!(view.state(), DetailState::Closed);
    }

    #[test]
    fn test_missing_detail_defaults_to_empty() {
        let json = r#"{
            "projects": [
                { "id": 1, "title": "Bare", "category": "webdev", "description": "", "image": "" }
            ]
        }"#;
        let catalog = CatalogStore::from_json(json).unwrap();
        let mut view = DetailView::new();
        view.open(&catalog, ProjectId(1)).unwrap();
        let panel = view.panel(&catalog).unwrap();
        assert!(panel.detail.features.is_empty());
        assert!(panel.detail.tech_stack.is_empty());
    }
}
