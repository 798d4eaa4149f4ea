//! Hero-блок: имя, печатающаяся роль и призыв к действию.

use crate::layout::global_context::use_portfolio;
use crate::shared::components::ui::Button;
use crate::shared::dom::scroll_to_section;
use crate::shared::effects::ParticleField;
use crate::shared::icons::icon;
use contracts::shared::typing::TypingAnimator;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_portfolio();
    let (owner, typing) = ctx
        .config
        .with_value(|c| (c.owner.clone(), c.typing.clone()));

    let typed = RwSignal::new(String::new());

    // Цикл анимации живёт, пока жив сигнал
    spawn_local(async move {
        let mut animator = TypingAnimator::new(&typing);
        loop {
            let frame = animator.tick();
            if typed.try_set(frame.text).is_some() {
                log::debug!("hero: typing loop stopped");
                break;
            }
            TimeoutFuture::new(frame.delay_ms).await;
        }
    });

    view! {
        <section id="home" class="hero">
            <ParticleField />
            <div class="container hero-content">
                <p class="hero-greeting">"Hi, I'm"</p>
                <h1 class="hero-title">
                    <span class="gradient-text">{owner.name}</span>
                </h1>
                <h2 class="hero-subtitle">
                    <span class="typing-text">{move || typed.get()}</span>
                    <span class="typing-cursor">"|"</span>
                </h2>
                <p class="hero-description">{owner.tagline}</p>
                <div class="hero-buttons">
                    <Button on_click=Callback::new(|_| scroll_to_section("projects"))>
                        "View My Work"
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(|_| scroll_to_section("contact"))>
                        "Get In Touch"
                    </Button>
                </div>
            </div>
            <button
                class="scroll-indicator"
                aria-label="Scroll to about"
                on:click=|_| scroll_to_section("about")
            >
                {icon("chevron-down")}
            </button>
        </section>
    }
}
