//! Capabilities backed by the host browser.
//!
//! Each type here is a zero-sized handle that looks up `window` (and the
//! object it needs from it) on every call, so handles are `Send + Sync` and
//! can be captured freely by UI callbacks. Values the host does not expose
//! through `web-sys` (the network-information object, timing fields) are
//! read with `js_sys::Reflect`.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::ProbeError;

mod storage;
pub use storage::*;

mod cookie;
pub use cookie::*;

mod environment;
pub use environment::*;

mod timing;
pub use timing::*;

pub(crate) fn window() -> Result<web_sys::Window, ProbeError> {
    web_sys::window().ok_or_else(|| ProbeError::Unavailable("window".into()))
}

pub(crate) fn access_error(error: JsValue) -> ProbeError {
    ProbeError::Access(
        error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    )
}

/// Read a numeric property, treating anything non-numeric as absent.
pub(crate) fn number(target: &JsValue, property: &str) -> Option<f64> {
    Reflect::get(target, &property.into())
        .ok()
        .and_then(|value| value.as_f64())
}

/// Read a string property, treating anything non-string as absent.
pub(crate) fn string(target: &JsValue, property: &str) -> Option<String> {
    Reflect::get(target, &property.into())
        .ok()
        .and_then(|value| value.as_string())
}
