//! Decorative effects: scroll reveal, page loader, custom cursor, particles,
//! ripple and magnetic buttons.
//!
//! Geometry lives in `contracts::shared::effects`; this module only binds it to the DOM.

use crate::shared::dom::{
    self, current_target_element, has_fine_pointer, now_ms, observe_once,
    pointer_in_current_target, random, viewport_width, VisibilityWatch,
};
use contracts::shared::effects::{
    magnetic_offset, particle_count, CursorTrail, ParticleSpec, ParticleThrottle, Ripple,
    CURSOR_PARTICLE_INTERVAL_MS, CURSOR_PARTICLE_LIFETIME_MS, RIPPLE_LIFETIME_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

const LOADER_MIN_DISPLAY_MS: f64 = 2000.0;
const LOADER_FADE_MS: u32 = 800;
const LOADER_STARS: usize = 50;

/// Слот для наблюдателя видимости: освобождается вместе с компонентом.
pub fn scoped_watch() -> StoredValue<Option<VisibilityWatch>, LocalStorage> {
    let watch = StoredValue::new_local(None);
    on_cleanup(move || {
        drop(watch.try_update_value(|w| w.take()));
    });
    watch
}

/// Wrapper that fades its content in the first time it scrolls into view.
#[component]
pub fn Reveal(
    /// Extra classes besides `reveal`
    #[prop(optional, into)]
    class: String,
    /// Stagger delay for the CSS transition
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);
    let watch = scoped_watch();

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            let handle = observe_once(&el, 0.1, "0px 0px -50px 0px", move || {
                let _ = revealed.try_set(true);
            });
            watch.set_value(handle);
        }
    });

    let style = if delay_ms > 0 {
        format!("transition-delay: {}ms;", delay_ms)
    } else {
        String::new()
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {}", class)
            class:active=move || revealed.get()
            style=style
        >
            {children()}
        </div>
    }
}

/// Full-screen loader shown for a minimum time, then faded out and removed.
#[component]
pub fn PageLoader() -> impl IntoView {
    let visible = RwSignal::new(true);
    let fading = RwSignal::new(false);
    let started = now_ms();

    let stars: Vec<String> = (0..LOADER_STARS)
        .map(|_| {
            format!(
                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
                random() * 100.0,
                random() * 100.0,
                random() * 3.0
            )
        })
        .collect();

    spawn_local(async move {
        let remaining = (LOADER_MIN_DISPLAY_MS - (now_ms() - started)).max(0.0);
        TimeoutFuture::new(remaining as u32).await;
        if fading.try_set(true).is_some() {
            return;
        }
        TimeoutFuture::new(LOADER_FADE_MS).await;
        let _ = visible.try_set(false);
    });

    view! {
        <Show when=move || visible.get()>
            <div class="page-loader" class:fade-out=move || fading.get()>
                <div class="loader-stars">
                    {stars
                        .clone()
                        .into_iter()
                        .map(|style| view! { <div class="star" style=style></div> })
                        .collect_view()}
                </div>
                <div class="loader-spinner"></div>
            </div>
        </Show>
    }
}

fn animate_cursor(
    mouse: StoredValue<(f64, f64)>,
    trail: StoredValue<CursorTrail>,
    ring: RwSignal<(f64, f64)>,
    dot: RwSignal<(f64, f64)>,
) {
    let Some((mx, my)) = mouse.try_get_value() else {
        return;
    };
    let Some((ring_pos, dot_pos)) =
        trail.try_update_value(|t| (t.ring.step(mx, my), t.dot.step(mx, my)))
    else {
        return;
    };
    if ring.try_set(ring_pos).is_some() || dot.try_set(dot_pos).is_some() {
        return;
    }
    request_animation_frame(move || animate_cursor(mouse, trail, ring, dot));
}

fn spawn_cursor_particle(x: f64, y: f64) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(particle) = document.create_element("div") else {
        return;
    };
    let style = format!(
        "left: {}px; top: {}px; --tx: {:.1}px; --ty: {:.1}px;",
        x,
        y,
        (random() - 0.5) * 100.0,
        (random() - 0.5) * 100.0
    );
    let _ = particle.set_attribute("class", "cursor-particle");
    let _ = particle.set_attribute("style", &style);
    if body.append_child(&particle).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(CURSOR_PARTICLE_LIFETIME_MS).await;
        particle.remove();
    });
}

/// Ring + dot cursor that eases toward the pointer. Only on fine-pointer devices.
#[component]
pub fn CustomCursor() -> impl IntoView {
    if !has_fine_pointer() {
        return view! { <></> }.into_any();
    }

    let mouse = StoredValue::new((0.0f64, 0.0f64));
    let trail = StoredValue::new(CursorTrail::default());
    let throttle = StoredValue::new(ParticleThrottle::new(CURSOR_PARTICLE_INTERVAL_MS));
    let ring = RwSignal::new((0.0f64, 0.0f64));
    let dot = RwSignal::new((0.0f64, 0.0f64));
    let hovering = RwSignal::new(false);

    let move_handle = window_event_listener(ev::mousemove, move |e: ev::MouseEvent| {
        let (x, y) = (e.client_x() as f64, e.client_y() as f64);
        mouse.set_value((x, y));
        if throttle
            .try_update_value(|t| t.should_emit(now_ms()))
            .unwrap_or(false)
        {
            spawn_cursor_particle(x, y);
        }
    });

    let over_handle = window_event_listener(ev::mouseover, move |e: ev::MouseEvent| {
        let interactive = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a, button, .btn, input, textarea").ok().flatten())
            .is_some();
        hovering.set(interactive);
    });

    on_cleanup(move || {
        move_handle.remove();
        over_handle.remove();
    });

    request_animation_frame(move || animate_cursor(mouse, trail, ring, dot));

    view! {
        <div
            class="custom-cursor"
            class:hover=move || hovering.get()
            style=move || {
                let (x, y) = ring.get();
                format!("left: {}px; top: {}px;", x, y)
            }
        ></div>
        <div
            class="cursor-dot"
            class:hover=move || hovering.get()
            style=move || {
                let (x, y) = dot.get();
                format!("left: {}px; top: {}px;", x, y)
            }
        ></div>
    }
    .into_any()
}

/// Floating background particles; repositioned after every animation cycle.
#[component]
pub fn ParticleField() -> impl IntoView {
    let specs: Vec<ParticleSpec> = (0..particle_count(viewport_width()))
        .map(|_| ParticleSpec::generate(random))
        .collect();

    let reposition = move |e: ev::AnimationEvent| {
        if let Some(el) = e
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let style = el.style();
            let _ = style.set_property("left", &format!("{:.2}%", random() * 100.0));
            let _ = style.set_property("top", &format!("{:.2}%", random() * 100.0));
        }
    };

    view! {
        <div id="particleContainer" class="particle-container" aria-hidden="true">
            {specs
                .into_iter()
                .map(|spec| {
                    view! {
                        <div
                            class="particle"
                            style=spec.style()
                            on:animationiteration=reposition
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Click handler: material-style ripple inside the clicked element.
pub fn ripple(ev: &ev::MouseEvent) {
    let Some((host, pointer)) = pointer_in_current_target(ev) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let _ = span.set_attribute("class", "ripple");
    let _ = span.set_attribute("style", &Ripple::at(pointer).style());

    let host_style = host.style();
    let _ = host_style.set_property("position", "relative");
    let _ = host_style.set_property("overflow", "hidden");
    if host.append_child(&span).is_err() {
        return;
    }
    spawn_local(async move {
        TimeoutFuture::new(RIPPLE_LIFETIME_MS).await;
        span.remove();
    });
}

/// Mousemove handler: pull the element toward the pointer.
pub fn magnetic_move(ev: &ev::MouseEvent) {
    if let Some((el, pointer)) = pointer_in_current_target(ev) {
        if let Some((dx, dy)) = magnetic_offset(pointer) {
            let _ = el
                .style()
                .set_property("transform", &format!("translate({:.2}px, {:.2}px)", dx, dy));
        }
    }
}

/// Mouseleave handler for [`magnetic_move`].
pub fn magnetic_reset(ev: &ev::MouseEvent) {
    if let Some(el) = current_target_element(ev) {
        let _ = el.style().set_property("transform", "translate(0, 0)");
    }
}
