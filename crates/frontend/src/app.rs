use crate::domain::a001_project::ui::list::ProjectsSection;
use crate::layout::global_context::PortfolioContext;
use crate::layout::Shell;
use crate::sections::about::About;
use crate::sections::contact::Contact;
use crate::sections::hero::Hero;
use crate::shared::theme::ThemeProvider;
use contracts::domain::a001_project::CatalogStore;
use contracts::shared::config::load_site_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_site_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load site config: {}", e);
            return view! { <p class="fatal-error">"Site configuration is invalid."</p> }
                .into_any();
        }
    };

    // Catalog is read once at startup and never changes afterwards.
    let catalog = CatalogStore::embedded().unwrap_or_else(|e| {
        log::error!("Failed to load project catalog: {}", e);
        CatalogStore::default()
    });
    log::debug!("catalog loaded: {} projects", catalog.len());

    let theme_key = config.storage.theme_key.clone();
    provide_context(PortfolioContext::new(config, catalog));

    view! {
        <thaw::ConfigProvider>
            <ThemeProvider storage_key=theme_key>
                <Shell>
                    <Hero />
                    <About />
                    <ProjectsSection />
                    <Contact />
                </Shell>
            </ThemeProvider>
        </thaw::ConfigProvider>
    }
    .into_any()
}
