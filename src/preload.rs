use crate::core::constants::{ASSET_BASE, PROGRESS_TICK_MS};
use crate::core::SceneError;
use crate::effects::{self, SceneContext};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn asset_url(name: &str) -> String {
    format!("{}{}", ASSET_BASE, name)
}

/// Fire-and-forget cache warm-up, no completion tracking.
pub fn warm(names: &[&str]) {
    for name in names {
        if let Ok(img) = web::HtmlImageElement::new() {
            img.set_src(&asset_url(name));
        }
    }
}

/// Load every asset in the manifest concurrently and drive the progress bar
/// until the scene asks to navigate.
pub fn start(ctx: Rc<SceneContext>, manifest: &'static [&'static str]) {
    for name in manifest {
        load_image(ctx.clone(), asset_url(name));
    }
    start_ticker(ctx);
}

fn load_image(ctx: Rc<SceneContext>, url: String) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            let err = SceneError::AssetFailed(format!("{}: {:?}", url, e));
            ctx.scene.borrow_mut().asset_resolved(Err(err));
            return;
        }
    };
    // load and error are mutually exclusive, but count at most once regardless
    let settled = Rc::new(Cell::new(false));

    let (ctx_ok, settled_ok) = (ctx.clone(), settled.clone());
    let onload = Closure::once_into_js(move || {
        if !settled_ok.replace(true) {
            ctx_ok.scene.borrow_mut().asset_resolved(Ok(()));
        }
    });
    let url_err = url.clone();
    let onerror = Closure::once_into_js(move || {
        if !settled.replace(true) {
            ctx.scene
                .borrow_mut()
                .asset_resolved(Err(SceneError::AssetFailed(url_err)));
        }
    });
    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(&url);
}

/// Self-scheduling timer; stops rescheduling once the scene reports it is done.
fn start_ticker(ctx: Rc<SceneContext>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let last = Rc::new(Cell::new(Instant::now()));
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt_ms = now.duration_since(last.get()).as_millis().max(1) as u32;
        last.set(now);
        let (fx, keep) = ctx.scene.borrow_mut().progress_tick(dt_ms);
        effects::apply(&ctx, fx);
        if keep {
            schedule(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            PROGRESS_TICK_MS as i32,
        );
    }
}
