use web_sys as web;

use crate::constants::{FACT_CARD_ID, FACT_TEXT_ID, HIDDEN_CLASS};

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FACT_CARD_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FACT_CARD_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    let Some(el) = document.get_element_by_id(FACT_CARD_ID) else {
        return false;
    };
    if el.class_list().contains(HIDDEN_CLASS) {
        return true;
    }
    el.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Replace the card text. Uses `textContent`, never HTML.
pub fn set_fact_text(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(FACT_TEXT_ID) {
        el.set_text_content(Some(text));
    }
}
