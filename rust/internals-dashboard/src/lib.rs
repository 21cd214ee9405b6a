//! Browser dashboard for the state a page can observe about itself.
//!
//! `internals-dashboard` renders six cards over the readers in
//! [`internals_probe`]: local storage, session storage, cookies,
//! environment & device, navigation performance and network status.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ DashboardApp                                              │
//! │                                                           │
//! │  Host ── state::use_* ── signals / memos ──▸ components   │
//! │   │                                                       │
//! │   ├─ KeyValueStore ×2   (snapshot, refresh, clear)        │
//! │   ├─ CookieSource       (snapshot)                        │
//! │   ├─ EnvironmentProvider(snapshot + Subscription)         │
//! │   └─ TimingProvider     (snapshot + Subscription)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every capability is injected through a [`Host`], so the whole tree runs
//! against the in-memory fakes of `internals_probe` in tests and against
//! the browser in the `panel` binary. Subscriptions are owned by the
//! reactive scope that created them and released when it is cleaned up.
//!
//! # Modules
//!
//! - **[`config`]**: [`DashboardConfig`](config::DashboardConfig), read from
//!   a `<meta>` tag in the host document.
//! - **[`host`]**: the capability bundle handed to the app.
//! - **[`state`]**: reactive wrappers that read, refresh and subscribe.
//! - **[`components`]**: Leptos CSR UI.
//!
//! # Entry points
//!
//! - **`panel`** binary: installs logging and mounts [`DashboardApp`] to
//!   the document body.
//!
//! [`DashboardApp`]: components::DashboardApp
//! [`Host`]: host::Host

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod logging;

pub mod config;

pub mod host;

pub mod state;

pub mod components;
