//! WASM entry point for the dashboard.
//!
//! This binary is compiled to WebAssembly via Trunk (see `index.html`) and
//! mounts the dashboard to the document body, reading from the page it is
//! served in.

fn main() {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use internals_dashboard::components::DashboardApp;
        use internals_dashboard::config::DashboardConfig;
        use internals_dashboard::host::Host;
        use leptos::prelude::*;

        let config = DashboardConfig::from_document();
        internals_dashboard::logging::init(&config);

        mount_to_body(move || view! { <DashboardApp host=Host::browser() config=config /> });
    }
}
