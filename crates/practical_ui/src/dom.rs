//! Internal DOM focus and event-target helpers for widget components.

use wasm_bindgen::JsCast;

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
pub(crate) fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Removes focus from the active element, ignoring pages without one.
pub(crate) fn blur_active_element() {
    if let Some(element) = active_html_element() {
        let _ = element.blur();
    }
}

/// Reports whether an event originated inside `container` (or on it).
pub(crate) fn event_within(ev: &web_sys::Event, container: &web_sys::Element) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
