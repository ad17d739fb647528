#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod layout;
mod reveal;
mod scene;

thread_local! {
    static MOUNTED: RefCell<Option<hero::Hero>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ronin-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[hero] init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    mount_hero()
}

fn mount_hero() -> anyhow::Result<()> {
    // Tear the old instance down before the new one subscribes.
    drop(MOUNTED.with(|m| m.borrow_mut().take()));
    let hero = hero::Hero::mount()?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(hero));
    Ok(())
}

/// Mount (or remount) the hero on the current document.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_hero().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Release every listener, observer and frame request of the mounted hero.
#[wasm_bindgen]
pub fn unmount() {
    if MOUNTED.with(|m| m.borrow_mut().take()).is_none() {
        log::warn!("[hero] unmount without a mounted hero");
    }
}
