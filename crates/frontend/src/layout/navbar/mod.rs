//! Верхняя навигация: автоскрытие, подсветка активного раздела,
//! плавная прокрутка и мобильное меню.

use crate::layout::global_context::use_portfolio;
use crate::shared::dom::{scroll_to_section, scroll_y, section_offsets, set_body_scroll_locked};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use contracts::shared::effects::{LOGO_PULSE_INTERVAL_MS, LOGO_PULSE_RESTART_MS};
use contracts::shared::scroll::{active_section, NavbarAppearance, NavbarScroll};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Ждём, пока мобильное меню закроется, и только потом прокручиваем
const MENU_CLOSE_DELAY_MS: u32 = 300;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_portfolio();
    let sections = ctx.sections();
    let section_ids: Vec<String> = sections.iter().map(|(id, _)| id.clone()).collect();
    let brand = ctx.config.with_value(|c| c.owner.name.clone());

    let appearance = RwSignal::new(NavbarAppearance::default());
    let tracker = StoredValue::new(NavbarScroll::new());
    let active = RwSignal::new(section_ids.first().cloned());
    let menu_open = RwSignal::new(false);
    let logo_pulse = RwSignal::new(false);

    // Пульсация логотипа: снять анимацию и через мгновение запустить заново
    spawn_local(async move {
        loop {
            TimeoutFuture::new(LOGO_PULSE_INTERVAL_MS).await;
            if logo_pulse.try_set(false).is_some() {
                return;
            }
            TimeoutFuture::new(LOGO_PULSE_RESTART_MS).await;
            if logo_pulse.try_set(true).is_some() {
                return;
            }
        }
    });

    let on_scroll = move || {
        let y = scroll_y();
        if let Some(next) = tracker.try_update_value(|t| t.update(y)) {
            if appearance.get_untracked() != next {
                appearance.set(next);
            }
        }
        let offsets = section_offsets(&section_ids);
        let current = active_section(&offsets, y).map(str::to_string);
        if current.is_some() && active.get_untracked() != current {
            active.set(current);
        }
    };

    let scroll_handle = window_event_listener(ev::scroll, move |_| on_scroll());
    on_cleanup(move || scroll_handle.remove());

    let set_menu = move |open: bool| {
        menu_open.set(open);
        set_body_scroll_locked(open);
    };

    let link_list = move |mobile: bool| {
        sections
            .clone()
            .into_iter()
            .map(|(id, label)| {
                let href = format!("#{}", id);
                let is_active = {
                    let id = id.clone();
                    move || active.get().as_deref() == Some(id.as_str())
                };
                let go = move |e: ev::MouseEvent| {
                    e.prevent_default();
                    if mobile {
                        set_menu(false);
                        let id = id.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(MENU_CLOSE_DELAY_MS).await;
                            scroll_to_section(&id);
                        });
                    } else {
                        scroll_to_section(&id);
                    }
                };
                view! {
                    <li>
                        <a
                            href=href
                            class=if mobile { "mobile-nav-link" } else { "nav-link" }
                            class:active=is_active
                            on:click=go
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    let desktop_links = link_list(false);
    let mobile_links = link_list(true);

    view! {
        <nav
            id="navbar"
            class="navbar"
            class:scrolled=move || appearance.get().scrolled
            class:hidden=move || appearance.get().hidden
        >
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo"
                    class:pulse=move || logo_pulse.get()
                    on:click=move |e: ev::MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("home");
                    }
                >
                    {brand}
                    <span class="gradient-text">"."</span>
                </a>
                <ul class="nav-menu">{desktop_links}</ul>
                <div class="nav-actions">
                    <ThemeToggle />
                    <button
                        id="mobileMenuBtn"
                        class="mobile-menu-btn"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu(!menu_open.get_untracked())
                    >
                        {move || icon(if menu_open.get() { "x" } else { "menu" })}
                    </button>
                </div>
            </div>
        </nav>

        <div
            id="mobileMenu"
            class="mobile-menu"
            class:active=move || menu_open.get()
            on:click=move |e: ev::MouseEvent| {
                // Клик по подложке, а не по ссылкам
                if e.target() == e.current_target() {
                    set_menu(false);
                }
            }
        >
            <ul class="mobile-nav-menu">{mobile_links}</ul>
        </div>
    }
}
