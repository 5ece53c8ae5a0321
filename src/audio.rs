use crate::constants::AUDIO_ELEMENT_ID;
use crate::core::SceneError;
use crate::effects::{self, SceneContext};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn audio_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    document
        .get_element_by_id(AUDIO_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
}

/// Ask the browser to start background playback. The outcome is reported back
/// to the scene, which either relabels the toggle or raises the retry notice.
pub fn play(ctx: &Rc<SceneContext>) {
    let promise = match audio_element(&ctx.document) {
        Some(audio) => audio
            .play()
            .map_err(|e| SceneError::PlaybackDenied(format!("{:?}", e))),
        None => Err(SceneError::MissingElement(AUDIO_ELEMENT_ID)),
    };
    let promise = match promise {
        Ok(p) => p,
        Err(err) => {
            let fx = ctx.scene.borrow_mut().audio_blocked(err);
            effects::apply(ctx, fx);
            return;
        }
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        let fx = match JsFuture::from(promise).await {
            Ok(_) => ctx.scene.borrow_mut().audio_started(),
            Err(e) => ctx
                .scene
                .borrow_mut()
                .audio_blocked(SceneError::PlaybackDenied(format!("{:?}", e))),
        };
        effects::apply(&ctx, fx);
    });
}

pub fn stop(document: &web::Document) {
    if let Some(audio) = audio_element(document) {
        _ = audio.pause();
        audio.set_current_time(0.0);
    }
}
