use crate::shared::components::ui::Badge;
use crate::shared::dom::{current_target_element, pointer_in_current_target};
use crate::shared::effects::{ripple, Reveal};
use crate::shared::icons::icon;
use contracts::domain::a001_project::{
    is_activation_key, CardInteraction, CardTarget, CardView, CardVisibility, ProjectId,
};
use contracts::shared::effects::{tilt_transform, CARD_TILT_SCALE, TILT_RESET};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn tilt(ev: &ev::MouseEvent) {
    if let Some((el, pointer)) = pointer_in_current_target(ev) {
        let _ = el
            .style()
            .set_property("transform", &tilt_transform(pointer, CARD_TILT_SCALE));
    }
}

fn reset_tilt(ev: &ev::MouseEvent) {
    if let Some(el) = current_target_element(ev) {
        let _ = el.style().set_property("transform", TILT_RESET);
    }
}

/// Карточка проекта в сетке. Клик (или Enter/Space) по телу открывает детали,
/// клики по ссылкам до карточки не доходят.
///
/// Карточка не размонтируется при смене фильтра: сначала затухает, затем скрывается.
#[component]
pub fn ProjectCard(
    card: CardView,
    /// Stagger для появления
    #[prop(optional)]
    delay_ms: u32,
    /// Проходит ли карточка текущий фильтр
    #[prop(into)]
    visible: Signal<bool>,
    on_open: Callback<ProjectId>,
) -> impl IntoView {
    let card = StoredValue::new(card);
    let phase = RwSignal::new(if visible.get_untracked() {
        CardVisibility::Shown
    } else {
        CardVisibility::Hidden
    });

    Effect::new(move |_| {
        let matches = visible.get();
        let current = phase.get_untracked();
        let next = current.request(matches);
        if next == current {
            return;
        }
        phase.set(next);
        if let Some(delay) = next.settle_delay_ms() {
            spawn_local(async move {
                TimeoutFuture::new(delay).await;
                let _ = phase.try_update(|p| *p = p.settle(next));
            });
        }
    });

    let open_detail = move || {
        let interaction = card.with_value(|c| c.interaction(CardTarget::Body));
        if let CardInteraction::OpenDetail(id) = interaction {
            on_open.run(id);
        }
    };

    let handle_body_click = move |ev: ev::MouseEvent| {
        ripple(&ev);
        open_detail();
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        // Enter на ссылке внутри карточки остаётся переходом по ссылке
        let on_card_itself = ev.target() == ev.current_target();
        if on_card_itself && is_activation_key(&ev.key()) {
            ev.prevent_default();
            open_detail();
        }
    };

    let link = move |target: CardTarget, label: &'static str, icon_name: &'static str| {
        let affordance = card.with_value(|c| match target {
            CardTarget::SourceLink => c.source.clone(),
            _ => c.live.clone(),
        });
        affordance.visible.then(|| {
            view! {
                <a
                    class="project-link"
                    href=affordance.href
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    {icon(icon_name)}
                    {label}
                </a>
            }
        })
    };

    let c = card.get_value();

    view! {
        <div class="project-cell" class:filtered-hidden=move || !phase.get().is_displayed()>
            <Reveal delay_ms=delay_ms>
                <div
                    class="project-card"
                    class:filtered-out=move || phase.get().is_faded()
                    data-category=c.category.clone()
                    role="button"
                    tabindex="0"
                    aria-label=format!("Open details: {}", c.title)
                    on:mousemove=move |ev| tilt(&ev)
                    on:mouseleave=move |ev| reset_tilt(&ev)
                    on:click=handle_body_click
                    on:keydown=handle_keydown
                >
                    <div class="project-image">
                        <img src=c.image_ref.clone() alt=c.title.clone() loading="lazy" />
                        {c.show_featured_badge
                            .then(|| view! { <Badge variant="featured" class="featured-badge">"Featured"</Badge> })}
                    </div>
                    <div class="project-content">
                        <h3 class="project-title">{c.title.clone()}</h3>
                        <p class="project-description">{c.description.clone()}</p>
                        <div class="project-links">
                            {link(CardTarget::LiveLink, " Live Demo", "external-link")}
                            {link(CardTarget::SourceLink, " GitHub", "github")}
                        </div>
                    </div>
                </div>
            </Reveal>
        </div>
    }
}
