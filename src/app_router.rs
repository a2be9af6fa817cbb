use folio_core::NavSection;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

pub(crate) fn scroll_to_section(section: NavSection) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(section.anchor()) else {
        gloo::console::warn!("router: missing section", section.anchor());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub(crate) fn section_from_location_hash() -> Option<NavSection> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    if hash.trim().is_empty() {
        return None;
    }
    NavSection::from_anchor(&hash)
}

/// Honors a deep link such as `/#projects` once the sections are mounted.
pub(crate) fn scroll_to_location_hash() {
    if let Some(section) = section_from_location_hash() {
        scroll_to_section(section);
    }
}
