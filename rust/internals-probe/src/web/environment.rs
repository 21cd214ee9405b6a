use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

use crate::{
    ConnectionInfo, Dimensions, EnvironmentChange, EnvironmentInfo, EnvironmentProvider,
    Listener, NetworkStatus, Subscription,
};

use super::{number, string, window};

/// Vendor-prefixed spellings of `navigator.connection`, in lookup order.
const CONNECTION_PROPERTIES: [&str; 3] = ["connection", "mozConnection", "webkitConnection"];

type EventClosure = Closure<dyn FnMut(web_sys::Event)>;

/// `navigator`, `screen` and window size of the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserEnvironment;

impl EnvironmentProvider for BrowserEnvironment {
    fn environment(&self) -> EnvironmentInfo {
        let Ok(window) = window() else {
            return EnvironmentInfo::default();
        };
        let navigator = window.navigator();
        let screen = window
            .screen()
            .ok()
            .map(|screen| {
                Dimensions::new(
                    pixels(screen.width().ok().map(f64::from)),
                    pixels(screen.height().ok().map(f64::from)),
                )
            })
            .unwrap_or_default();

        EnvironmentInfo {
            user_agent: navigator.user_agent().unwrap_or_default(),
            language: navigator.language().unwrap_or_default(),
            platform: navigator.platform().unwrap_or_default(),
            screen,
            viewport: viewport(&window),
        }
    }

    fn network(&self) -> NetworkStatus {
        let Ok(window) = window() else {
            return NetworkStatus::default();
        };
        let navigator = window.navigator();

        NetworkStatus {
            online: navigator.on_line(),
            connection: connection(&navigator).map(|c| read_connection(&c)),
        }
    }

    fn subscribe(&self, listener: Listener<EnvironmentChange>) -> Subscription {
        let Ok(window) = window() else {
            return Subscription::inert();
        };
        let window_target: EventTarget = window.clone().into();
        let mut registrations: Vec<(EventTarget, &'static str, EventClosure)> = Vec::new();

        {
            let listener = listener.clone();
            let window = window.clone();
            registrations.push((
                window_target.clone(),
                "resize",
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    listener(EnvironmentChange::Resized(viewport(&window)))
                }) as Box<dyn FnMut(web_sys::Event)>),
            ));
        }
        {
            let listener = listener.clone();
            registrations.push((
                window_target.clone(),
                "online",
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    listener(EnvironmentChange::Online)
                }) as Box<dyn FnMut(web_sys::Event)>),
            ));
        }
        {
            let listener = listener.clone();
            registrations.push((
                window_target,
                "offline",
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    listener(EnvironmentChange::Offline)
                }) as Box<dyn FnMut(web_sys::Event)>),
            ));
        }

        if let Some(connection) = connection(&window.navigator()) {
            if let Some(target) = connection.dyn_ref::<EventTarget>() {
                let source = connection.clone();
                registrations.push((
                    target.clone(),
                    "change",
                    Closure::wrap(Box::new(move |_: web_sys::Event| {
                        listener(EnvironmentChange::Connection(Some(read_connection(&source))))
                    }) as Box<dyn FnMut(web_sys::Event)>),
                ));
            }
        }

        registrations.retain(|(target, kind, closure)| {
            match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!(event = *kind, ?error, "Failed to register listener");
                    false
                }
            }
        });
        tracing::debug!(count = registrations.len(), "Registered environment listeners");

        Subscription::new(move || {
            for (target, kind, closure) in registrations {
                let _ = target
                    .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            }
            tracing::debug!("Released environment listeners");
        })
    }
}

fn viewport(window: &web_sys::Window) -> Dimensions {
    Dimensions::new(
        pixels(window.inner_width().ok().and_then(|v| v.as_f64())),
        pixels(window.inner_height().ok().and_then(|v| v.as_f64())),
    )
}

fn pixels(value: Option<f64>) -> u32 {
    value.map(|v| v.max(0.0) as u32).unwrap_or(0)
}

fn connection(navigator: &web_sys::Navigator) -> Option<JsValue> {
    CONNECTION_PROPERTIES.iter().find_map(|property| {
        Reflect::get(navigator.as_ref(), &(*property).into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    })
}

fn read_connection(connection: &JsValue) -> ConnectionInfo {
    ConnectionInfo {
        effective_type: string(connection, "effectiveType"),
        downlink: number(connection, "downlink"),
    }
}
