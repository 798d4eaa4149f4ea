//! Thin helpers over `web_sys` used by the page sections.
//!
//! All of them degrade to no-ops when the window/document is unavailable.

use contracts::shared::effects::PointerInRect;
use contracts::shared::scroll::{scroll_target, SectionOffset};
use leptos::ev::MouseEvent;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

/// Pointer devices with real hover (no custom cursor on touch screens).
pub fn has_fine_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(hover: hover) and (pointer: fine)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn section_element(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Offsets of the given sections that exist on the page, in the given order.
pub fn section_offsets(ids: &[String]) -> Vec<SectionOffset> {
    ids.iter()
        .filter_map(|id| {
            section_element(id).map(|el| SectionOffset {
                id: id.clone(),
                top: el.offset_top() as f64,
            })
        })
        .collect()
}

/// Smooth scroll so the section starts just below the navbar.
pub fn scroll_to_section(id: &str) {
    let Some(section) = section_element(id) else {
        log::debug!("scroll: section '{}' not found", id);
        return;
    };
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Lock/unlock page scrolling (mobile menu).
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Element the listener is attached to.
pub fn current_target_element(ev: &MouseEvent) -> Option<HtmlElement> {
    ev.current_target()?.dyn_into::<HtmlElement>().ok()
}

/// Pointer position relative to the listener's element.
pub fn pointer_in_current_target(ev: &MouseEvent) -> Option<(HtmlElement, PointerInRect)> {
    let el = current_target_element(ev)?;
    let rect = el.get_bounding_client_rect();
    let pointer = PointerInRect {
        x: ev.client_x() as f64 - rect.left(),
        y: ev.client_y() as f64 - rect.top(),
        width: rect.width(),
        height: rect.height(),
    };
    Some((el, pointer))
}

/// Callback, который можно вызвать не больше одного раза
/// или отменить до вызова. Клоны делят одно состояние.
#[derive(Clone)]
pub struct FireOnce(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl FireOnce {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Вызвать, если ещё не вызывали и не отменили. `true`, если вызов был.
    pub fn fire(&self) -> bool {
        let f = self.0.borrow_mut().take();
        match f {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    pub fn cancel(&self) {
        self.0.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Владеет IntersectionObserver и его JS-замыканием.
/// При drop наблюдение прекращается, а несработавший callback отменяется.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    pending: FireOnce,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatch {
    pub fn disconnect(&self) {
        self.pending.cancel();
        self.observer.disconnect();
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Run `on_visible` once, the first time `element` intersects the viewport.
///
/// The returned watch must be kept alive until the element unmounts; dropping it
/// stops observing. `None` means the observer was unavailable and `on_visible`
/// already ran.
pub fn observe_once(
    element: &Element,
    threshold: f64,
    root_margin: &str,
    on_visible: impl FnOnce() + 'static,
) -> Option<VisibilityWatch> {
    let pending = FireOnce::new(on_visible);

    let callback = {
        let pending = pending.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    observer.disconnect();
                    pending.fire();
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(VisibilityWatch {
                observer,
                pending,
                _callback: callback,
            })
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
            pending.fire();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fire_once_runs_a_single_time() {
        let hits = Rc::new(Cell::new(0));
        let once = {
            let hits = Rc::clone(&hits);
            FireOnce::new(move || hits.set(hits.get() + 1))
        };
        let shared = once.clone();

        assert!(once.fire());
        assert!(!shared.fire());
        assert!(!once.is_pending());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_cancelled_callback_never_runs() {
        // Элемент размонтирован раньше, чем попал в область видимости
        let hits = Rc::new(Cell::new(0));
        let once = {
            let hits = Rc::clone(&hits);
            FireOnce::new(move || hits.set(hits.get() + 1))
        };
        let held_by_observer = once.clone();

        once.cancel();
        assert!(!held_by_observer.fire());
        assert_eq!(hits.get(), 0);
    }
}
