//! Drives the mounted dashboard through the DOM.

#![cfg(all(target_arch = "wasm32", target_os = "unknown"))]

use std::sync::Arc;

use internals_dashboard::components::DashboardApp;
use internals_dashboard::host::Host;
use internals_probe::{
    EnvironmentInfo, FakeEnvironment, FakeTiming, KeyValueStore, MemoryStore, NetworkStatus,
    StaticCookies,
};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

struct Mounted {
    container: HtmlElement,
    local: MemoryStore,
    session: MemoryStore,
}

impl Mounted {
    fn new() -> Self {
        let local = MemoryStore::default();
        let session = MemoryStore::default();
        local.set("theme", "dark");
        session.set("draft", "hello");

        let host = Host {
            local: Arc::new(local.clone()),
            session: Arc::new(session.clone()),
            cookies: Arc::new(StaticCookies::new("")),
            environment: Arc::new(FakeEnvironment::new(
                EnvironmentInfo::default(),
                NetworkStatus::default(),
            )),
            timing: Arc::new(FakeTiming::default()),
        };

        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document");
        let container: HtmlElement = document
            .create_element("div")
            .expect("container")
            .dyn_into()
            .expect("html element");
        document
            .body()
            .expect("body")
            .append_child(&container)
            .expect("attach container");

        leptos::mount::mount_to(container.clone(), move || view! { <DashboardApp host=host /> })
            .forget();

        Self {
            container,
            local,
            session,
        }
    }

    fn button(&self, label: &str) -> Option<HtmlElement> {
        let buttons = self.container.query_selector_all("button").ok()?;
        (0..buttons.length())
            .filter_map(|index| buttons.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .find(|button| button.text_content().as_deref().map(str::trim) == Some(label))
    }

    fn backdrop(&self) -> Option<HtmlElement> {
        self.container
            .query_selector(".dialog-backdrop")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into().ok())
    }

    async fn click(&self, element: HtmlElement) {
        element.click();
        leptos::task::Executor::tick().await;
    }
}

#[wasm_bindgen_test]
async fn it_clears_only_the_confirmed_store() {
    let app = Mounted::new();

    app.click(app.button("Clear Local Storage").expect("clear button"))
        .await;
    app.click(app.button("Confirm").expect("confirm button")).await;

    assert!(app.local.is_empty().expect("local readable"));
    assert!(!app.session.is_empty().expect("session readable"));
    assert!(app.button("Confirm").is_none());
}

#[wasm_bindgen_test]
async fn it_keeps_entries_when_cancelled_or_dismissed() {
    let app = Mounted::new();

    app.click(app.button("Clear Session Storage").expect("clear button"))
        .await;
    app.click(app.button("Cancel").expect("cancel button")).await;
    assert!(app.button("Confirm").is_none());

    app.click(app.button("Clear Session Storage").expect("clear button"))
        .await;
    app.click(app.backdrop().expect("backdrop")).await;
    assert!(app.button("Confirm").is_none());

    assert!(!app.local.is_empty().expect("local readable"));
    assert!(!app.session.is_empty().expect("session readable"));
}
