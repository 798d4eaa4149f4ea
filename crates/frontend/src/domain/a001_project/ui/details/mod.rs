pub mod view_model;

use crate::shared::components::ui::Badge;
use crate::shared::dom::set_body_class;
use crate::shared::effects::ripple;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_project::{DetailEvent, DetailPanel};
use contracts::shared::effects::tech_badge_delay;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use view_model::ProjectDetailsVm;

/// Модальное окно с деталями; смонтировано только пока открыто.
#[component]
pub fn ProjectDetails(vm: ProjectDetailsVm) -> impl IntoView {
    let panel = Memo::new(move |_| vm.panel());

    // Scroll lock страницы, пока окно открыто
    Effect::new(move |_| set_body_class("modal-open", vm.is_open()));
    on_cleanup(|| set_body_class("modal-open", false));

    // Кнопка закрытия размонтирует окно: закрываем на следующем тике
    let close = move |_: leptos::ev::MouseEvent| {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            vm.dispatch(DetailEvent::CloseRequested);
        });
    };

    move || {
        panel.get().map(|panel| {
            view! {
                <ModalFrame
                    on_outside_click=Callback::new(move |_| vm.dispatch(DetailEvent::OutsideClick))
                    on_cancel=Callback::new(move |_| vm.dispatch(DetailEvent::Cancel))
                    on_inside_click=Callback::new(move |_| vm.dispatch(DetailEvent::InsideClick))
                    modal_class="project-modal"
                >
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=close
                    >
                        {icon("x")}
                    </button>
                    <DetailsBody panel=panel />
                </ModalFrame>
            }
        })
    }
}

#[component]
fn DetailsBody(panel: DetailPanel) -> impl IntoView {
    let DetailPanel { record, detail } = panel;
    let live_visible = record.has_live_link();
    let source_visible = record.has_source_link();

    view! {
        <div class="modal-image">
            <img id="modalImage" src=record.image_ref.clone() alt=record.title.clone() />
            {record.featured.then(|| view! { <Badge variant="featured">"Featured"</Badge> })}
        </div>
        <div class="modal-body">
            <Badge variant="category" class="modal-category">{record.category.clone()}</Badge>
            <h2 id="modalTitle" class="modal-title">{record.title.clone()}</h2>
            <p class="modal-description">{record.description.clone()}</p>

            {(!detail.tech_stack.is_empty())
                .then(|| view! { <h3 class="modal-section-title">"Tech Stack"</h3> })}
            <div class="modal-tech-stack">
                {detail
                    .tech_stack
                    .iter()
                    .enumerate()
                    .map(|(index, tech)| view! {
                        <span
                            class="modal-tech-badge"
                            style=tech_badge_delay(index)
                            on:click=move |ev| ripple(&ev)
                        >
                            {tech.clone()}
                        </span>
                    })
                    .collect_view()}
            </div>

            {(!detail.features.is_empty())
                .then(|| view! { <h3 class="modal-section-title">"Key Features"</h3> })}
            <ul class="modal-features">
                {detail
                    .features
                    .iter()
                    .map(|feature| view! { <li>{feature.clone()}</li> })
                    .collect_view()}
            </ul>

            <div class="modal-links">
                {live_visible.then(|| view! {
                    <a class="btn btn-primary" href=record.live_url.clone() target="_blank" rel="noopener noreferrer">
                        {icon("external-link")} " Live Demo"
                    </a>
                })}
                {source_visible.then(|| view! {
                    <a class="btn btn-secondary" href=record.source_url.clone() target="_blank" rel="noopener noreferrer">
                        {icon("github")} " View Code"
                    </a>
                })}
            </div>
        </div>
    }
}
