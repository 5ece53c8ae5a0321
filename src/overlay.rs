use crate::constants::{
    BUBBLE_BACKDROP_ID, CLASS_HIDDEN, ENTRY_BUBBLE_ID, PROGRESS_BAR_ID, PROGRESS_TEXT_ID,
    TRANSITION_OVERLAY_ID,
};
use crate::dom;
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(CLASS_HIDDEN);
        _ = el.remove_attribute("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Door page: the "come in?" bubble plus the backdrop that swallows stray clicks.
pub fn show_bubble(document: &web::Document) {
    dom::set_hidden(document, ENTRY_BUBBLE_ID, false);
    dom::set_hidden(document, BUBBLE_BACKDROP_ID, false);
}

pub fn hide_bubble(document: &web::Document) {
    dom::set_hidden(document, ENTRY_BUBBLE_ID, true);
    dom::set_hidden(document, BUBBLE_BACKDROP_ID, true);
}

/// Full-screen overlay shown for the whole exit sequence.
pub fn show_transition(document: &web::Document) {
    show(document, TRANSITION_OVERLAY_ID);
    set_progress(document, 0);
}

pub fn hide_transition(document: &web::Document) {
    hide(document, TRANSITION_OVERLAY_ID);
}

pub fn set_progress(document: &web::Document, percent: u8) {
    if let Some(bar) = dom::html_by_id(document, PROGRESS_BAR_ID) {
        dom::set_style(&bar, "width", &format!("{}%", percent));
    }
    if let Some(el) = document.get_element_by_id(PROGRESS_TEXT_ID) {
        el.set_text_content(Some(&format!("{}%", percent)));
    }
}
