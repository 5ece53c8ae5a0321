pub mod pointer;
pub mod touch;

use crate::dom;
use crate::effects::SceneContext;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_all(ctx: &Rc<SceneContext>) {
    pointer::wire_pointer_handlers(ctx);
    pointer::wire_buttons(ctx);
    touch::wire_touch_handlers(ctx);
}

#[inline]
pub fn mouse_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Client position of the first active touch point.
#[inline]
pub fn first_touch(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

/// Whether `ev` happened inside the element with `id`.
pub fn event_within(document: &web::Document, ev: &web::Event, id: &str) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return false;
    };
    dom::by_id(document, id).is_some_and(|el| el.contains(Some(&target)))
}
