use leptos::ev;
use leptos::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface).
///
/// Closes on overlay click and on Escape. Clicks inside the surface never reach the overlay.
/// Mount it only while the modal is open: the Escape listener lives as long as the frame.
#[component]
pub fn ModalFrame(
    /// Called on a click that starts and ends on the overlay itself.
    on_outside_click: Callback<()>,
    /// Called on Escape.
    on_cancel: Callback<()>,
    /// Called on clicks inside the surface (after propagation is stopped).
    #[prop(optional)]
    on_inside_click: Option<Callback<()>>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // We only close if both press and release happened on the overlay itself.
    // This prevents closing when user selects text inside the modal and releases the mouse outside.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: avoids Leptos event delegation calling a dropped handler
            // when the overlay is removed synchronously during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_outside_click.run(());
            });
        }
    };

    let handle_surface_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        if let Some(cb) = on_inside_click {
            cb.run(());
        }
    };

    let escape_handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    });
    on_cleanup(move || escape_handle.remove());

    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay active"
            role="dialog"
            aria-modal="true"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class on:click=handle_surface_click>
                {children()}
            </div>
        </div>
    }
}
