use crate::audio;
use crate::constants::*;
use crate::core::constants::{CLICK_FLASH_MS, LAYOUT_RETRY_LIMIT, LAYOUT_RETRY_MS};
use crate::core::hotspot::Region;
use crate::core::scene::Effects;
use crate::core::{
    AudioCommand, Cursor, DoorEvent, HotspotId, SceneEffect, SceneError, SceneKind, SceneState,
};
use crate::dom::{self, DomLayout};
use crate::overlay;
use crate::preload;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything a handler needs: the DOM and the single scene owner.
pub struct SceneContext {
    pub document: web::Document,
    pub kind: SceneKind,
    pub scene: RefCell<SceneState>,
    pub container: web::HtmlElement,
    captions: FnvHashMap<HotspotId, Vec<web::Element>>,
}

impl SceneContext {
    pub fn new(document: web::Document, scene: SceneState) -> anyhow::Result<Rc<Self>> {
        let kind = scene.config().kind;
        let id = container_id(kind);
        let container =
            dom::html_by_id(&document, id).ok_or(SceneError::MissingElement(id))?;
        let captions = scene
            .registry()
            .iter()
            .map(|spot| {
                let els = caption_ids(spot.id)
                    .iter()
                    .filter_map(|cid| dom::by_id(&document, cid))
                    .collect::<Vec<_>>();
                (spot.id, els)
            })
            .collect();
        Ok(Rc::new(Self {
            document,
            kind,
            scene: RefCell::new(scene),
            container,
            captions,
        }))
    }

    pub fn layout(&self) -> DomLayout<'_> {
        DomLayout {
            document: &self.document,
            kind: self.kind,
            pan_x: self.scene.borrow().pan_offset(),
        }
    }

    fn body(&self) -> Option<web::HtmlElement> {
        self.document.body()
    }
}

pub fn apply(ctx: &Rc<SceneContext>, fx: Effects) {
    for effect in fx {
        apply_one(ctx, effect);
    }
}

fn apply_one(ctx: &Rc<SceneContext>, effect: SceneEffect) {
    match effect {
        SceneEffect::Cursor(cursor) => set_cursor(ctx, cursor),
        SceneEffect::Caption { id, visible } => {
            if let Some(els) = ctx.captions.get(&id) {
                for el in els {
                    _ = el.class_list().toggle_with_force(CLASS_VISIBLE, visible);
                }
            }
        }
        SceneEffect::FlashCursor => flash_cursor(ctx),
        SceneEffect::Door(event) => door_changed(ctx, event),
        SceneEffect::Lamp(on) => dom::set_class(&ctx.document, LAMP_LIGHT_ID, CLASS_ACTIVE, on),
        SceneEffect::Menu(open) => {
            dom::set_class(&ctx.document, MENU_BUTTON_ID, CLASS_ACTIVE, open);
            dom::set_class(&ctx.document, MENU_ID, CLASS_OPEN, open);
            if let Some(overlay) = dom::html_by_id(&ctx.document, DOOR_OVERLAY_ID) {
                dom::set_style(&overlay, "pointer-events", "none");
                dom::set_style(&overlay, "z-index", "1");
                dom::set_style(&overlay, "opacity", "0");
            }
        }
        SceneEffect::Audio(AudioCommand::Play) => audio::play(ctx),
        SceneEffect::Audio(AudioCommand::Stop) => audio::stop(&ctx.document),
        SceneEffect::AudioLabel(on) => {
            dom::set_class(&ctx.document, AUDIO_TOGGLE_ID, CLASS_ACTIVE, on);
            if let Some(el) = dom::by_id(&ctx.document, AUDIO_TEXT_ID) {
                el.set_text_content(Some(if on { AUDIO_LABEL_ON } else { AUDIO_LABEL_OFF }));
            }
        }
        SceneEffect::Notice(message) => {
            if let Some(w) = web::window() {
                _ = w.alert_with_message(message);
            }
        }
        SceneEffect::Pan(offset) => {
            dom::set_style(&ctx.container, CSS_PAN_X, &format!("{}px", offset));
        }
        SceneEffect::TransitionStarted => overlay::show_transition(&ctx.document),
        SceneEffect::Preload(manifest) => preload::start(ctx.clone(), manifest),
        SceneEffect::Progress(percent) => overlay::set_progress(&ctx.document, percent),
        SceneEffect::Navigate(destination) => {
            log::info!("[nav] -> {}", destination);
            if let Some(w) = web::window() {
                _ = w.location().set_href(destination);
            }
        }
        SceneEffect::RetryLayout => {
            let ctx = ctx.clone();
            dom::set_timeout(LAYOUT_RETRY_MS, move || {
                let fx = {
                    let layout = ctx.layout();
                    ctx.scene.borrow_mut().refresh(&layout)
                };
                apply(&ctx, fx);
            });
        }
    }
}

fn cursor_value(cursor: Cursor) -> &'static str {
    match cursor {
        Cursor::Default => CURSOR_NORMAL,
        Cursor::Pointer => CURSOR_POINTER,
        Cursor::Hidden => CURSOR_HIDDEN,
    }
}

fn set_cursor(ctx: &SceneContext, cursor: Cursor) {
    if let Some(body) = ctx.body() {
        dom::set_style(&body, "cursor", cursor_value(cursor));
        _ = body
            .class_list()
            .toggle_with_force(CLASS_POINTER_CURSOR, cursor == Cursor::Pointer);
    }
}

/// Briefly show the pointer glyph, then restore whatever the scene says now.
fn flash_cursor(ctx: &Rc<SceneContext>) {
    if let Some(body) = ctx.body() {
        dom::set_style(&body, "cursor", CURSOR_POINTER);
    }
    let ctx = ctx.clone();
    dom::set_timeout(CLICK_FLASH_MS, move || {
        let cursor = ctx.scene.borrow().feedback().cursor;
        set_cursor(&ctx, cursor);
    });
}

fn door_changed(ctx: &Rc<SceneContext>, event: DoorEvent) {
    let doc = &ctx.document;
    match (ctx.kind, event) {
        (SceneKind::Door, DoorEvent::Opened) => {
            _ = ctx.container.class_list().add_1(CLASS_OPENED);
            _ = ctx.container.class_list().remove_1(CLASS_KNOB_GLOW);
            dom::set_style(&ctx.container, "transform", "none");
            overlay::show_bubble(doc);
            dom::set_hidden(doc, hint_dot_id(HotspotId::Knob), true);
            dom::set_hidden(doc, KNOB_CLOSED_ID, true);
            dom::set_hidden(doc, KNOB_OPEN_ID, true);
            dom::set_hidden(doc, KNOB_OPENED_ID, false);
        }
        (SceneKind::Door, DoorEvent::Closed) => {
            _ = ctx.container.class_list().remove_1(CLASS_OPENED);
            overlay::hide_bubble(doc);
            dom::set_hidden(doc, KNOB_OPENED_ID, true);
            dom::set_hidden(doc, KNOB_CLOSED_ID, false);
            dom::set_hidden(doc, KNOB_OPEN_ID, true);
            dom::set_hidden(doc, hint_dot_id(HotspotId::Knob), false);
            position_hints(ctx, 0);
            // The knob is live again: re-test where the pointer already is.
            let ctx = ctx.clone();
            dom::set_timeout(0, move || {
                let fx = {
                    let layout = ctx.layout();
                    ctx.scene.borrow_mut().refresh(&layout)
                };
                apply(&ctx, fx);
            });
        }
        (_, DoorEvent::Opened) | (_, DoorEvent::Closed) => {
            let opening = event == DoorEvent::Opened;
            if let Some(overlay) = dom::html_by_id(doc, DOOR_OVERLAY_ID) {
                _ = overlay.class_list().toggle_with_force(CLASS_OPENING, opening);
                _ = overlay.class_list().toggle_with_force(CLASS_CLOSING, !opening);
                if ctx.scene.borrow().menu_open() {
                    dom::set_style(&overlay, "pointer-events", "none");
                    dom::set_style(&overlay, "z-index", "1");
                }
            }
            dom::set_style(&ctx.container, "transform", "none");
        }
        (_, DoorEvent::ExitStarted) => {}
    }
}

/// Place the hint dots at their container-relative positions. Retries while
/// the container has not been laid out.
pub fn position_hints(ctx: &Rc<SceneContext>, attempt: u8) {
    let rect = ctx.container.get_bounding_client_rect();
    let (width, height) = (rect.width() as f32, rect.height() as f32);
    if width <= 0.0 || height <= 0.0 {
        if attempt < LAYOUT_RETRY_LIMIT {
            let ctx = ctx.clone();
            dom::set_timeout(LAYOUT_RETRY_MS, move || position_hints(&ctx, attempt + 1));
        } else {
            log::warn!("[hints] container never laid out");
        }
        return;
    }
    let vw = dom::viewport_width();
    let scene = ctx.scene.borrow();
    for spot in scene.registry().iter() {
        let Some([fx, fy]) = spot.placement(vw) else {
            continue;
        };
        let (left, top) = (width * fx, height * fy);
        if let Some(dot) = dom::html_by_id(&ctx.document, hint_dot_id(spot.id)) {
            dom::set_style(&dot, "left", &format!("{}px", left));
            dom::set_style(&dot, "top", &format!("{}px", top));
        }
        if let (Region::Container { .. }, Some(radius)) =
            (spot.region, spot.container_radius(width, vw))
        {
            let size = (radius * 2.0).round();
            dom::set_style(&ctx.container, CSS_KNOB_LEFT, &format!("{}px", left));
            dom::set_style(&ctx.container, CSS_KNOB_TOP, &format!("{}px", top));
            dom::set_style(&ctx.container, CSS_KNOB_SIZE, &format!("{}px", size));
        }
    }
}
