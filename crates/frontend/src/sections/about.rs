use crate::layout::global_context::use_portfolio;
use crate::shared::dom::{observe_once, scroll_y};
use crate::shared::effects::{ripple, scoped_watch, Reveal};
use crate::shared::icons::icon;
use contracts::shared::counter::CounterAnimation;
use contracts::shared::effects::{
    floating_icon_parallax, passion_badge_delay, photo_parallax, tech_badge_delay,
};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Доля видимости, при которой стартует счётчик
const COUNTER_VISIBILITY: f64 = 0.5;

/// Иконки, плавающие вокруг фото
const FLOATING_ICONS: [&str; 4] = ["code", "cpu", "database", "zap"];

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_portfolio();
    let (owner, stats, tech_stack, passions) = ctx.config.with_value(|c| {
        (
            c.owner.clone(),
            c.stats.clone(),
            c.tech_stack.clone(),
            c.passions.clone(),
        )
    });
    let photo_alt = owner.name.clone();

    // Параллакс фото и плавающих иконок
    let scrolled = RwSignal::new(scroll_y());
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        scrolled.set(scroll_y());
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <section id="about" class="about">
            <div class="container">
                <Reveal>
                    <h2 class="section-title">"About " <span class="gradient-text">"Me"</span></h2>
                </Reveal>
                <div class="about-content">
                    {owner.photo.map(|src| view! {
                        <Reveal class="about-image">
                            <div
                                class="profile-photo-container"
                                style:transform=move || photo_parallax(scrolled.get())
                            >
                                <img src=src alt=photo_alt />
                            </div>
                            {FLOATING_ICONS
                                .iter()
                                .enumerate()
                                .map(|(index, name)| view! {
                                    <span
                                        class=format!("floating-icon floating-icon-{}", index + 1)
                                        style:transform=move || floating_icon_parallax(scrolled.get(), index)
                                    >
                                        {icon(name)}
                                    </span>
                                })
                                .collect_view()}
                        </Reveal>
                    })}
                    <Reveal class="about-text" delay_ms=100>
                        <p>{owner.about}</p>
                        <div class="passion-badges">
                            {passions
                                .into_iter()
                                .enumerate()
                                .map(|(index, passion)| view! {
                                    <span
                                        class="badge-pill"
                                        style=passion_badge_delay(index)
                                        on:click=move |e| ripple(&e)
                                    >
                                        {passion}
                                    </span>
                                })
                                .collect_view()}
                        </div>
                        <div class="stats">
                            {stats
                                .into_iter()
                                .map(|stat| view! { <StatCounter label=stat.label value=stat.value /> })
                                .collect_view()}
                        </div>
                        <div class="tech-badges">
                            {tech_stack
                                .into_iter()
                                .enumerate()
                                .map(|(index, tech)| view! {
                                    <span
                                        class="tech-badge"
                                        style=tech_badge_delay(index)
                                        on:click=move |e| ripple(&e)
                                    >
                                        {tech}
                                    </span>
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Счётчик, который один раз "досчитывает" до значения, когда становится виден.
#[component]
fn StatCounter(label: String, value: String) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let animation = CounterAnimation::from_text(&value);
    // Без числа показываем текст как есть
    let shown = RwSignal::new(if animation.is_some() {
        "0".to_string()
    } else {
        value
    });

    let watch = scoped_watch();

    Effect::new(move |_| {
        let (Some(el), Some(animation)) = (node_ref.get(), animation) else {
            return;
        };
        let handle = observe_once(&el, COUNTER_VISIBILITY, "0px", move || {
            spawn_local(async move {
                let mut animation = animation;
                while !animation.is_finished() {
                    TimeoutFuture::new(CounterAnimation::interval_ms()).await;
                    if shown.try_set(animation.step()).is_some() {
                        return;
                    }
                }
            });
        });
        watch.set_value(handle);
    });

    view! {
        <div class="stat-item" node_ref=node_ref>
            <h3 class="stat-number">{move || shown.get()}</h3>
            <p class="stat-label">{label}</p>
        </div>
    }
}
