pub mod state;

use super::card::ProjectCard;
use super::details::view_model::ProjectDetailsVm;
use super::details::ProjectDetails;
use crate::layout::global_context::use_portfolio;
use crate::shared::components::ui::Button;
use crate::shared::effects::Reveal;
use contracts::domain::a001_project::card::render_all;
use contracts::domain::a001_project::{CategoryFilter, ALL_CATEGORIES};
use leptos::prelude::*;
use state::{category_label, ProjectListState};

const CARD_STAGGER_MS: u32 = 80;

/// Секция `#projects`: кнопки фильтра, сетка карточек и окно деталей.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_portfolio();
    let state = ProjectListState::new();
    let details = ProjectDetailsVm::new(ctx.catalog);

    let tokens: Vec<String> = std::iter::once(ALL_CATEGORIES.to_string())
        .chain(
            ctx.catalog
                .with_value(|c| c.categories().into_iter().map(str::to_string).collect::<Vec<_>>()),
        )
        .collect();

    // Все карточки смонтированы один раз; фильтр только переключает их видимость
    let cards = ctx.catalog.with_value(|c| render_all(c.get_all()));
    let is_empty = Memo::new(move |_| ctx.catalog.with_value(|c| state.is_empty_for(c)));

    let open = Callback::new(move |id| details.select(id));

    view! {
        <section id="projects" class="projects">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"Featured " <span class="gradient-text">"Projects"</span></h2>
                </Reveal>

                <Reveal class="project-filters">
                    {tokens
                        .into_iter()
                        .map(|token| {
                            let filter = CategoryFilter::parse(&token);
                            let selected = {
                                let filter = filter.clone();
                                move || state.is_selected(&filter)
                            };
                            view! {
                                <Button
                                    variant="filter"
                                    active=Signal::derive(selected)
                                    on_click=Callback::new(move |_| state.select(filter.clone()))
                                >
                                    {category_label(&token)}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div id="projectsGrid" class="projects-grid">
                    {cards
                        .into_iter()
                        .enumerate()
                        .map(|(index, card)| {
                            let category = card.category.clone();
                            let visible = Signal::derive(move || state.shows_category(&category));
                            view! {
                                <ProjectCard
                                    card=card
                                    delay_ms=(index as u32) * CARD_STAGGER_MS
                                    visible=visible
                                    on_open=open
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || is_empty.get()>
                    <p class="projects-empty">"No projects in this category yet."</p>
                </Show>
            </div>

            <ProjectDetails vm=details />
        </section>
    }
}
