use crate::shared::effects::{magnetic_move, magnetic_reset, ripple};
use leptos::prelude::*;

/// Page button with ripple on click and magnetic pull on hover.
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary" or "filter"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Pressed state for toggle-like buttons (filters)
    #[prop(optional, into)]
    active: MaybeProp<bool>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "btn btn-secondary",
        "filter" => "filter-btn",
        _ => "btn btn-primary",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("{} magnetic {}", variant_class(), additional_class())
            class:active=move || active.get().unwrap_or(false)
            aria-pressed=move || active.get().map(|a| a.to_string())
            disabled=move || disabled.get().unwrap_or(false)
            on:mousemove=move |ev| magnetic_move(&ev)
            on:mouseleave=move |ev| magnetic_reset(&ev)
            on:click=move |ev| {
                ripple(&ev);
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
