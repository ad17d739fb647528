use crate::constants::POINTER_EVENT;
use crate::dom;
use gloo::events::EventListener;
use ronin_core::SignalHandle;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer moves into the pointer signal. Dropping the returned
/// listener unsubscribes.
pub fn track_pointer(window: &web::Window, signals: SignalHandle) -> EventListener {
    EventListener::new(window, POINTER_EVENT, move |event: &web::Event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        signals.pointer_moved(
            ev.client_x() as f64,
            ev.client_y() as f64,
            dom::viewport_size(),
        );
    })
}
