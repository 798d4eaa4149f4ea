use contracts::domain::a001_project::CatalogStore;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

/// Read-only data shared by every section of the page.
#[derive(Clone, Copy)]
pub struct PortfolioContext {
    pub config: StoredValue<SiteConfig>,
    pub catalog: StoredValue<CatalogStore>,
}

impl PortfolioContext {
    pub fn new(config: SiteConfig, catalog: CatalogStore) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    /// `(id, label)` pairs for the navigation.
    pub fn sections(&self) -> Vec<(String, String)> {
        self.config.with_value(|c| {
            c.sections
                .iter()
                .map(|s| (s.id.clone(), s.label.clone()))
                .collect()
        })
    }
}

pub fn use_portfolio() -> PortfolioContext {
    use_context::<PortfolioContext>().expect("PortfolioContext not provided in context")
}
