#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod attrs;
mod config;
mod controller;
mod dom;
mod emitter;
mod nav;
mod parallax;
mod readouts;
mod reveal;
mod styles;

pub use controller::EffectsController;

thread_local! {
    static CONTROLLER: RefCell<Option<EffectsController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pipeline-effects starting");

    let (_, document) = dom::window_document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_init);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

/// Stop every effect and detach it from the page. Safe to call repeatedly.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(controller) = CONTROLLER.with(|c| c.borrow_mut().take()) {
        controller.teardown();
    }
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    // a second start replaces the first instead of stacking listeners
    teardown();
    let (window, document) = dom::window_document()?;
    let config = config::from_document(&document);
    let controller = EffectsController::new(&window, &document, &config)?;
    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller));
    Ok(())
}
