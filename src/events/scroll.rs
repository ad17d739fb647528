use crate::constants::{RESIZE_EVENT, SCROLL_EVENT};
use crate::dom;
use gloo::events::EventListener;
use ronin_core::SignalHandle;
use web_sys as web;

/// Push the scroll region's current geometry into the progress signal.
pub fn sample_scroll(region: &web::Element, signals: &SignalHandle) -> bool {
    let rect = region.get_bounding_client_rect();
    let viewport = dom::viewport_size();
    signals.scrolled(rect.top() as f32, rect.height() as f32, viewport.y)
}

/// Track scroll progress through `region`. Resizes change the travel
/// distance, so they resample too.
pub fn track_scroll_progress(
    window: &web::Window,
    region: &web::Element,
    signals: SignalHandle,
) -> [EventListener; 2] {
    sample_scroll(region, &signals);

    let on_scroll = {
        let region = region.clone();
        let signals = signals.clone();
        EventListener::new(window, SCROLL_EVENT, move |_event| {
            sample_scroll(&region, &signals);
        })
    };
    let region = region.clone();
    let on_resize = EventListener::new(window, RESIZE_EVENT, move |_event| {
        sample_scroll(&region, &signals);
    });
    [on_scroll, on_resize]
}
