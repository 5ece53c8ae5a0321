#![cfg(target_arch = "wasm32")]
use crate::constants::HOVER_QUERY;
use crate::core::scene::parse_flag;
use crate::core::{DoorEvent, InputCapabilities, SceneConfig, SceneEffect, SceneKind, SceneState};
use smallvec::smallvec;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod effects;
mod events;
mod overlay;
mod preload;

fn log_level(body: Option<&web::HtmlElement>) -> log::Level {
    body.and_then(|b| b.get_attribute("data-log-level"))
        .and_then(|s| s.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}

/// Resolve what the platform can do once, before any handler runs.
fn detect_capabilities(window: &web::Window) -> InputCapabilities {
    let hover = window
        .match_media(HOVER_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false);
    let touch = window.navigator().max_touch_points() > 0;
    let orientation = js_sys::Reflect::has(window, &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false);
    InputCapabilities {
        hover,
        touch,
        orientation,
    }
}

/// Page variant from `<body data-scene>`, plus per-page gesture overrides.
fn scene_config(body: &web::HtmlElement) -> SceneConfig {
    let kind = body
        .get_attribute("data-scene")
        .and_then(|s| SceneKind::from_attr(&s))
        .unwrap_or(SceneKind::Door);
    let mut config = SceneConfig::for_kind(kind);
    if let Some(on) = body.get_attribute("data-swipe").and_then(|s| parse_flag(&s)) {
        config = config.with_swipe(on);
    }
    if let Some(on) = body.get_attribute("data-tilt").and_then(|s| parse_flag(&s)) {
        config = config.with_tilt(on);
    }
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let body = dom::window_document().and_then(|d| d.body());
    console_log::init_with_level(log_level(body.as_ref())).ok();
    log::info!("doorway-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&doc, "DOMContentLoaded", move |_ev: web::Event| run());
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let config = scene_config(&body);
    let caps = detect_capabilities(&window);
    log::info!(
        "[scene] {:?} hover={} touch={} swipe={} tilt={}",
        config.kind,
        caps.hover,
        caps.touch,
        config.triggers.swipe,
        config.triggers.tilt && caps.tilt_enabled()
    );
    let kind = config.kind;
    let scene = SceneState::new(config, caps, dom::viewport_width());
    let ctx = effects::SceneContext::new(document, scene)?;

    match kind {
        SceneKind::Door => preload::warm(&["closed_door.png", "opened_door.png"]),
        SceneKind::Room | SceneKind::RoomVariant => {
            preload::warm(&["cursor_normal.png"]);
            // Room pages start with the door overlay in its opened state.
            effects::apply(&ctx, smallvec![SceneEffect::Door(DoorEvent::Opened)]);
        }
    }
    overlay::hide_transition(&ctx.document);
    effects::position_hints(&ctx, 0);
    events::wire_all(&ctx);
    Ok(())
}
