//! Browser bridge for Tiltype.
//!
//! Wires the page's grant button, `deviceorientation` and `beforeinput`
//! events to a [`tiltype::Session`]. JavaScript calls [`tiltype_init`] once
//! after the module loads.

pub mod dom;
pub mod permission;
pub mod runner;

use std::cell::RefCell;

use tiltype::{GateAction, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{DeviceOrientationEvent, Event, InputEvent};

pub use dom::{DomSurface, Ui};
pub use runner::TypeRunner;

thread_local! {
    static RUNNER: RefCell<Option<TypeRunner>> = RefCell::new(None);
}

/// Run `f` against the page runner. Returns `None` before [`tiltype_init`] succeeded.
fn with_runner<R>(f: impl FnOnce(&mut TypeRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Look up the page, install the runner and register the input listeners.
#[wasm_bindgen]
pub fn tiltype_init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let ui = Ui::lookup(&document)?;

    let grant = ui.grant.clone();
    let text_input = ui.text_input.clone();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(TypeRunner::new(Session::default(), ui));
    });

    let on_grant = Closure::wrap(Box::new(move |_event: Event| {
        on_grant_click();
    }) as Box<dyn FnMut(_)>);
    grant.add_event_listener_with_callback("click", on_grant.as_ref().unchecked_ref())?;
    on_grant.forget();

    let on_before_input = Closure::wrap(Box::new(move |event: InputEvent| {
        with_runner(|r| r.on_before_input(&event));
    }) as Box<dyn FnMut(_)>);
    text_input
        .add_event_listener_with_callback("beforeinput", on_before_input.as_ref().unchecked_ref())?;
    on_before_input.forget();

    log::info!("tiltype: initialized");
    Ok(())
}

/// Replace the tuning (weight, tilt and cadence ranges) from JSON.
#[wasm_bindgen]
pub fn tiltype_load_config(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_config(json))
        .unwrap_or_else(|| Err(JsValue::from_str("tiltype_init() has not run")))
}

/// Current `font-variation-settings` value that the next glyph would get.
#[wasm_bindgen]
pub fn tiltype_axes() -> Option<String> {
    with_runner(|r| r.session().snapshot().font_variation_settings())
}

fn on_grant_click() {
    let requires_prompt = permission::requires_prompt();
    let Some(action) = with_runner(|r| r.activate(requires_prompt)) else {
        return;
    };
    match action {
        GateAction::AlreadyGranted => {}
        GateAction::Open => start_tracking(),
        GateAction::Prompt => {
            // Issued here, inside the click, while the user activation is live.
            let pending = permission::request();
            wasm_bindgen_futures::spawn_local(async move {
                let result = pending.await;
                match with_runner(|r| r.resolve_permission(result)) {
                    Some(Ok(GateAction::Open)) => start_tracking(),
                    Some(Ok(_)) | None => {}
                    Some(Err(err)) => log::error!("Permission error: {err}"),
                }
            });
        }
    }
}

/// Subscribe to orientation updates for the rest of the page's life and
/// drop the overlay.
fn start_tracking() {
    if let Err(err) = listen_orientation() {
        log::error!("could not subscribe to deviceorientation: {}", permission::js_err(err));
        return;
    }
    with_runner(|r| r.tracking_started());
}

fn listen_orientation() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let on_orientation = Closure::wrap(Box::new(move |event: DeviceOrientationEvent| {
        with_runner(|r| r.on_orientation(event.gamma()));
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback(
        "deviceorientation",
        on_orientation.as_ref().unchecked_ref(),
    )?;
    on_orientation.forget();
    Ok(())
}
