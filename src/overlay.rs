use crate::constants::HINT_ID;
use web_sys as web;

#[inline]
pub fn show_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hint_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle_hint(document: &web::Document) {
    if is_hint_hidden(document) {
        show_hint(document);
    } else {
        hide_hint(document);
    }
}

/// Update the hint overlay with the current magazine and page
pub fn update_hint(document: &web::Document, magazine: &str, page: usize, page_count: usize) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let page_text = if page == 0 {
            "Cover".to_string()
        } else {
            format!("Page {} / {}", page, page_count)
        };
        let hint_html = format!(
            "<div class='hint'>{} • {} • ←/→ magazines • ↑/↓ pages • Esc reset</div>",
            magazine, page_text
        );
        el.set_inner_html(&hint_html);
    }
}
