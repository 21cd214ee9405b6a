//! Leptos UI components for the dashboard.
//!
//! The component tree is:
//!
//! ```text
//! DashboardApp
//! ├── Hero                  (title, tagline)
//! └── grid
//!     ├── StorageCard       (local storage, clearable)
//!     ├── StorageCard       (session storage, clearable)
//!     ├── StorageCard       (cookies, no sizes)
//!     ├── MetricsCard       (environment & device)
//!     ├── PerformanceCard   (navigation timing bars)
//!     └── MetricsCard       (network)
//! ```
//!
//! Clearable cards own a [`ConfirmDialog`].

mod confirm_dialog;
mod hero;
mod metrics_card;
mod performance_card;
mod storage_card;

pub use confirm_dialog::*;
pub use hero::*;
pub use metrics_card::*;
pub use performance_card::*;
pub use storage_card::*;

use internals_probe::StorageScope;
use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::host::Host;
use crate::state::{use_cookies, use_environment, use_navigation_metrics, use_store_snapshot};

/// Root component for the dashboard.
///
/// Takes one snapshot from every reader in `host` on mount and keeps the
/// environment, network and timing cards live for as long as it is mounted.
#[component]
pub fn DashboardApp(
    /// Capabilities to read from.
    host: Host,
    /// Page settings.
    #[prop(optional)]
    config: DashboardConfig,
) -> impl IntoView {
    let local = use_store_snapshot(host.store(StorageScope::Local));
    let session = use_store_snapshot(host.store(StorageScope::Session));
    let cookies = use_cookies(host.cookies.clone());
    let (environment_items, network_items) = use_environment(host.environment.clone());
    let metrics = use_navigation_metrics(host.timing.clone());

    let cookie_card = config.show_cookies.then(|| {
        view! { <StorageCard title="Cookies" entries=cookies show_sizes=false /> }
    });

    view! {
        <div class="dashboard-root">
            <div class="dashboard-container">
                <Hero title=config.title tagline=config.tagline />
                <div class="dashboard-grid">
                    <StorageCard
                        title=StorageScope::Local.title()
                        entries=local.entries
                        on_clear=local.clear
                    />
                    <StorageCard
                        title=StorageScope::Session.title()
                        entries=session.entries
                        on_clear=session.clear
                    />
                    {cookie_card}
                    <MetricsCard title="Environment & Device" items=environment_items />
                    <PerformanceCard metrics=metrics />
                    <MetricsCard title="Network" items=network_items />
                </div>
            </div>
        </div>
    }
}
