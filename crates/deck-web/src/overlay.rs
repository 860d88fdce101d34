use web_sys as web;

use crate::constants::{LABEL_LIST_ID, START_OVERLAY_ID};

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Fill the optional `#card-labels` list with the deck's labels. The wgpu
/// pipeline draws card faces only; label text lives in the DOM layer.
pub fn populate_label_list(document: &web::Document, labels: impl Iterator<Item = &'static str>) {
    if let Some(el) = document.get_element_by_id(LABEL_LIST_ID) {
        let html: String = labels.map(|l| format!("<li>{l}</li>")).collect();
        el.set_inner_html(&html);
    }
}
