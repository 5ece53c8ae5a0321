use super::{event_within, mouse_pos};
use crate::constants::*;
use crate::core::DoorTrigger;
use crate::dom;
use crate::effects::{self, SceneContext};
use std::rc::Rc;
use web_sys as web;

pub fn wire_pointer_handlers(ctx: &Rc<SceneContext>) {
    wire_mousemove(ctx);
    wire_scene_click(ctx);
    wire_outside_click(ctx);
    wire_resize(ctx);
    wire_orientation(ctx);
}

fn wire_mousemove(ctx: &Rc<SceneContext>) {
    let ctx = ctx.clone();
    let doc = ctx.document.clone();
    dom::listen(&doc, "mousemove", move |ev: web::MouseEvent| {
        let fx = {
            let layout = ctx.layout();
            ctx.scene.borrow_mut().pointer_moved(mouse_pos(&ev), &layout)
        };
        effects::apply(&ctx, fx);
    });
}

/// Clicks inside the scene container activate whichever hotspot is under the pointer.
fn wire_scene_click(ctx: &Rc<SceneContext>) {
    let w = ctx.clone();
    dom::listen(&ctx.container, "click", move |ev: web::MouseEvent| {
        let fx = {
            let layout = w.layout();
            w.scene.borrow_mut().activate(mouse_pos(&ev), &layout)
        };
        if !fx.is_empty() {
            ev.prevent_default();
        }
        effects::apply(&w, fx);
    });
}

/// Clicking anywhere outside the open menu closes it.
fn wire_outside_click(ctx: &Rc<SceneContext>) {
    if !ctx.scene.borrow().config().menu {
        return;
    }
    let ctx = ctx.clone();
    let doc = ctx.document.clone();
    dom::listen(&doc, "click", move |ev: web::MouseEvent| {
        if !ctx.scene.borrow().menu_open() {
            return;
        }
        if event_within(&ctx.document, &ev, MENU_ID)
            || event_within(&ctx.document, &ev, MENU_BUTTON_ID)
        {
            return;
        }
        let fx = ctx.scene.borrow_mut().close_menu();
        effects::apply(&ctx, fx);
    });
}

fn wire_resize(ctx: &Rc<SceneContext>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = ctx.clone();
    dom::listen(&window, "resize", move |_ev: web::Event| {
        let fx = ctx.scene.borrow_mut().resized(dom::viewport_width());
        effects::apply(&ctx, fx);
        effects::position_hints(&ctx, 0);
    });
}

/// Tilt is only wired on hover-capable platforms and when the page allows it.
fn wire_orientation(ctx: &Rc<SceneContext>) {
    let enabled = {
        let scene = ctx.scene.borrow();
        scene.capabilities().tilt_enabled() && scene.config().triggers.tilt
    };
    let Some(window) = web::window().filter(|_| enabled) else {
        return;
    };
    log::info!("[input] device orientation wired");
    let ctx = ctx.clone();
    dom::listen(
        &window,
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            if let Some(beta) = ev.beta() {
                let fx = ctx.scene.borrow_mut().tilted(beta);
                effects::apply(&ctx, fx);
            }
        },
    );
}

pub fn wire_buttons(ctx: &Rc<SceneContext>) {
    let doc = ctx.document.clone();

    let w = ctx.clone();
    dom::add_click_listener(&doc, BUBBLE_YES_ID, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        let fx = w.scene.borrow_mut().exit();
        effects::apply(&w, fx);
    });

    let w = ctx.clone();
    dom::add_click_listener(&doc, BUBBLE_NO_ID, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        let fx = w.scene.borrow_mut().trigger(DoorTrigger::SecondaryHotspot);
        effects::apply(&w, fx);
    });

    // The backdrop swallows every click outside the bubble.
    dom::add_click_listener(&doc, BUBBLE_BACKDROP_ID, |ev| {
        ev.prevent_default();
        ev.stop_propagation();
    });

    let w = ctx.clone();
    dom::add_click_listener(&doc, MENU_BUTTON_ID, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        let fx = w.scene.borrow_mut().toggle_menu();
        effects::apply(&w, fx);
    });

    let w = ctx.clone();
    dom::add_click_listener(&doc, AUDIO_TOGGLE_ID, move |ev| {
        ev.prevent_default();
        ev.stop_propagation();
        let fx = w.scene.borrow_mut().toggle_audio();
        effects::apply(&w, fx);
    });

    let w = ctx.clone();
    dom::add_click_listener(&doc, EXIT_BUTTON_ID, move |ev| {
        ev.prevent_default();
        let fx = w.scene.borrow_mut().exit();
        effects::apply(&w, fx);
    });

    // A closed door overlay must not eat clicks meant for the open menu.
    let w = ctx.clone();
    dom::add_click_listener(&doc, DOOR_OVERLAY_ID, move |ev| {
        if w.scene.borrow().menu_open() {
            ev.stop_propagation();
        }
    });
}
