use crate::constants::{SECTION_ALIGN_ATTR, SECTION_EXTRA_ATTR, SECTION_SELECTOR};
use crate::dom;
use ronin_core::layout::{section_classes, Align, SECTION_STYLE};
use web_sys as web;

/// Resolve `data-align`/`data-class` on every section wrapper into classes.
pub fn apply_sections(root: &web::Element) -> usize {
    let sections = dom::query_all(root, SECTION_SELECTOR);
    for section in &sections {
        let align = section
            .get_attribute(SECTION_ALIGN_ATTR)
            .map(|v| Align::from_attr(&v))
            .unwrap_or_default();
        let extra = section.get_attribute(SECTION_EXTRA_ATTR).unwrap_or_default();
        section.set_class_name(&section_classes(align, &extra));
        _ = section.set_attribute("style", SECTION_STYLE);
    }
    sections.len()
}
