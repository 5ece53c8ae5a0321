use super::first_touch;
use crate::dom;
use crate::effects::{self, SceneContext};
use std::rc::Rc;
use web_sys as web;

pub fn wire_touch_handlers(ctx: &Rc<SceneContext>) {
    wire_scene_tap(ctx);
    wire_touchstart(ctx);
    wire_touchmove(ctx);
    wire_touchend(ctx);
}

/// Taps inside the scene container activate hotspots, like clicks.
fn wire_scene_tap(ctx: &Rc<SceneContext>) {
    let w = ctx.clone();
    dom::listen(&ctx.container, "touchstart", move |ev: web::TouchEvent| {
        let Some(pos) = first_touch(&ev) else {
            return;
        };
        let fx = {
            let layout = w.layout();
            w.scene.borrow_mut().activate(pos, &layout)
        };
        if !fx.is_empty() {
            // Suppress the synthetic click that would activate the hotspot twice.
            ev.prevent_default();
        }
        effects::apply(&w, fx);
    });
}

fn wire_touchstart(ctx: &Rc<SceneContext>) {
    let ctx = ctx.clone();
    let doc = ctx.document.clone();
    dom::listen(&doc, "touchstart", move |ev: web::TouchEvent| {
        let Some(pos) = first_touch(&ev) else {
            return;
        };
        let fx = {
            let layout = ctx.layout();
            ctx.scene
                .borrow_mut()
                .touch_started(pos, ev.time_stamp(), &layout)
        };
        effects::apply(&ctx, fx);
    });
}

fn wire_touchmove(ctx: &Rc<SceneContext>) {
    let ctx = ctx.clone();
    let doc = ctx.document.clone();
    dom::listen(&doc, "touchmove", move |ev: web::TouchEvent| {
        let Some(pos) = first_touch(&ev) else {
            return;
        };
        let fx = {
            let layout = ctx.layout();
            ctx.scene.borrow_mut().touch_moved(pos, &layout)
        };
        effects::apply(&ctx, fx);
    });
}

fn wire_touchend(ctx: &Rc<SceneContext>) {
    let ctx = ctx.clone();
    let doc = ctx.document.clone();
    dom::listen(&doc, "touchend", move |ev: web::TouchEvent| {
        let fx = ctx.scene.borrow_mut().touch_ended(ev.time_stamp());
        effects::apply(&ctx, fx);
    });
}
