use wasm_bindgen::JsCast;

use crate::{CookieSource, ProbeError};

use super::{access_error, window};

/// `document.cookie` of the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserCookies;

impl CookieSource for BrowserCookies {
    fn raw(&self) -> Result<String, ProbeError> {
        let document = window()?
            .document()
            .ok_or_else(|| ProbeError::Unavailable("document".into()))?;
        let document: web_sys::HtmlDocument = document
            .dyn_into()
            .map_err(|_| ProbeError::Unavailable("HTML document".into()))?;
        document.cookie().map_err(access_error)
    }
}
