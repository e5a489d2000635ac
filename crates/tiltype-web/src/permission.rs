//! Motion-sensor permission prompt.
//!
//! Some platforms gate `deviceorientation` behind
//! `DeviceOrientationEvent.requestPermission()`, which is not part of the
//! standard typings, so it is looked up by reflection.

use std::future::Future;

use js_sys::{Function, Promise, Reflect};
use tiltype::{PermissionError, PermissionResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn request_permission_fn() -> Option<(JsValue, Function)> {
    let window = web_sys::window()?;
    let ctor = Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    if ctor.is_undefined() || ctor.is_null() {
        return None;
    }
    let request = Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((ctor, request))
}

/// Whether the platform needs an explicit prompt before orientation events flow.
pub fn requires_prompt() -> bool {
    request_permission_fn().is_some()
}

/// Ask the platform for motion-sensor access.
///
/// `requestPermission()` is invoked before this function returns, so it
/// must be called directly from the user-gesture handler; only the returned
/// future may be awaited later. Platforms without a prompt answer `Granted`.
pub fn request() -> impl Future<Output = Result<PermissionResponse, PermissionError>> {
    let pending = match request_permission_fn() {
        Some((ctor, request)) => request.call0(&ctor).map(Some).map_err(request_error),
        None => Ok(None),
    };
    await_response(pending)
}

async fn await_response(
    pending: Result<Option<JsValue>, PermissionError>,
) -> Result<PermissionResponse, PermissionError> {
    let Some(pending) = pending? else {
        return Ok(PermissionResponse::Granted);
    };
    let state = JsFuture::from(Promise::resolve(&pending))
        .await
        .map_err(request_error)?;
    Ok(PermissionResponse::parse(&state.as_string().unwrap_or_default()))
}

fn request_error(error: JsValue) -> PermissionError {
    PermissionError::Request(js_err(error))
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
