//! ViewModel модального окна деталей проекта.
//!
//! Всё состояние в одном `RwSignal<DetailView>`; меняется только через `dispatch`.

use contracts::domain::a001_project::{
    CatalogStore, DetailEvent, DetailPanel, DetailView, ProjectId,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProjectDetailsVm {
    pub view: RwSignal<DetailView>,
    catalog: StoredValue<CatalogStore>,
}

impl ProjectDetailsVm {
    pub fn new(catalog: StoredValue<CatalogStore>) -> Self {
        Self {
            view: RwSignal::new(DetailView::new()),
            catalog,
        }
    }

    pub fn dispatch(&self, event: DetailEvent) {
        let catalog = self.catalog;
        // Подписчики уведомляются только при реальной смене состояния
        self.view.maybe_update(|view| {
            let before = view.clone();
            catalog.with_value(|catalog| view.handle(catalog, event));
            *view != before
        });
    }

    pub fn select(&self, id: ProjectId) {
        self.dispatch(DetailEvent::Select(id));
    }

    /// Открыто ли окно (tracked).
    pub fn is_open(&self) -> bool {
        self.view.with(|v| v.is_open())
    }

    /// Данные открытого проекта (tracked).
    pub fn panel(&self) -> Option<DetailPanel> {
        let catalog = self.catalog;
        self.view
            .with(|view| catalog.with_value(|catalog| view.panel(catalog)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> ProjectDetailsVm {
        ProjectDetailsVm::new(StoredValue::new(CatalogStore::embedded().unwrap()))
    }

    #[test]
    fn test_select_then_cancel() {
        let vm = vm();
        assert!(!vm.is_open());
        assert!(vm.panel().is_none());

        vm.select(ProjectId(3));
        assert!(vm.is_open());
        assert_eq!(vm.panel().unwrap().record.title, "Smiley Food App");

        vm.dispatch(DetailEvent::InsideClick);
        assert!(vm.is_open());

        vm.dispatch(DetailEvent::Cancel);
        assert!(!vm.is_open());
        assert!(vm.panel().is_none());
    }

    #[test]
    fn test_unknown_id_keeps_closed() {
        let vm = vm();
        vm.select(ProjectId(999));
        assert!(!vm.is_open());
    }
}
