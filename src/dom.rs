use crate::constants::{container_id, hint_dot_id, MENU_BUTTON_ID};
use crate::core::{Anchor, Layout, Rect, SceneKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    match by_id(document, element_id) {
        Some(el) => listen(&el, "click", handler),
        None => log::debug!("[dom] no #{} to listen on", element_id),
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

#[inline]
pub fn set_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = by_id(document, id) {
        _ = el.class_list().toggle_with_force(class, on);
    }
}

#[inline]
pub fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = html_by_id(document, id) {
        el.set_hidden(hidden);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

pub fn element_rect(document: &web::Document, id: &str) -> Option<Rect> {
    let r = by_id(document, id)?.get_bounding_client_rect();
    Some(Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    ))
}

/// Live layout read straight from `getBoundingClientRect`.
///
/// Hint dots sit in the panned layer, so their measured position already
/// includes the pan; it is taken back out here because the hit-tester adds it.
pub struct DomLayout<'a> {
    pub document: &'a web::Document,
    pub kind: SceneKind,
    pub pan_x: f32,
}

impl Layout for DomLayout<'_> {
    fn rect(&self, anchor: Anchor) -> Option<Rect> {
        match anchor {
            Anchor::Container => element_rect(self.document, container_id(self.kind)),
            Anchor::HintDot(id) => element_rect(self.document, hint_dot_id(id)).map(|r| Rect {
                left: r.left - self.pan_x,
                ..r
            }),
            Anchor::MenuButton => element_rect(self.document, MENU_BUTTON_ID),
        }
    }

    fn viewport_width(&self) -> f32 {
        viewport_width()
    }
}
