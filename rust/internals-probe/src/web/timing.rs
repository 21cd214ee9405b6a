use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::{Listener, NavigationTiming, Subscription, TimingProvider};

use super::{number, string};

type ObserverClosure = Closure<dyn FnMut(web_sys::PerformanceObserverEntryList, JsValue)>;

/// `performance` timeline of the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTiming;

impl TimingProvider for BrowserTiming {
    fn navigation(&self) -> Option<NavigationTiming> {
        first_navigation(&performance()?.get_entries_by_type("navigation"))
    }

    fn paint(&self, name: &str) -> Option<f64> {
        performance()?
            .get_entries_by_type("paint")
            .iter()
            .find(|entry| string(entry, "name").as_deref() == Some(name))
            .and_then(|entry| number(&entry, "startTime"))
    }

    fn observe_navigation(&self, listener: Listener<NavigationTiming>) -> Subscription {
        let callback: ObserverClosure = Closure::wrap(Box::new(
            move |list: web_sys::PerformanceObserverEntryList, _observer: JsValue| {
                if let Some(navigation) = first_navigation(&list.get_entries_by_type("navigation"))
                {
                    listener(navigation);
                }
            },
        )
            as Box<dyn FnMut(web_sys::PerformanceObserverEntryList, JsValue)>);

        let observer = match web_sys::PerformanceObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(error) => {
                tracing::debug!(?error, "PerformanceObserver unavailable");
                return Subscription::inert();
            }
        };

        if let Err(error) = observe_buffered_navigation(&observer) {
            tracing::debug!(?error, "Navigation entries cannot be observed");
            observer.disconnect();
            return Subscription::inert();
        }

        Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        })
    }
}

fn performance() -> Option<web_sys::Performance> {
    web_sys::window()?.performance()
}

/// `observer.observe({ type: "navigation", buffered: true })`
fn observe_buffered_navigation(observer: &web_sys::PerformanceObserver) -> Result<(), JsValue> {
    let options = js_sys::Object::new();
    Reflect::set(&options, &"type".into(), &"navigation".into())?;
    Reflect::set(&options, &"buffered".into(), &JsValue::TRUE)?;

    let observe: js_sys::Function = Reflect::get(observer.as_ref(), &"observe".into())?.dyn_into()?;
    observe.call1(observer.as_ref(), &options)?;
    Ok(())
}

fn first_navigation(entries: &Array) -> Option<NavigationTiming> {
    let entry = entries.get(0);
    if entry.is_undefined() || entry.is_null() {
        return None;
    }

    let field = |property: &str| number(&entry, property).unwrap_or(0.0);
    Some(NavigationTiming {
        start_time: field("startTime"),
        request_start: field("requestStart"),
        response_start: field("responseStart"),
        dom_interactive: field("domInteractive"),
        load_event_end: field("loadEventEnd"),
    })
}
