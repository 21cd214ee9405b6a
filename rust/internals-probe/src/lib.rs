#![warn(missing_docs)]

//! Readers for the state a web page can observe about itself.
//!
//! Every reader sits on top of a small capability trait so it can run
//! against the real browser (the [`web`] module, compiled only for
//! `wasm32-unknown-unknown`) or against the in-memory implementations that
//! ship with the `helpers` feature:
//!
//! ```text
//! ┌────────────────────┐   ┌──────────────────────────┐
//! │ KeyValueStore      │──▸│ read_all / clear         │
//! │ CookieSource       │──▸│ read_cookie_source       │
//! │ EnvironmentProvider│──▸│ environment_items /      │
//! │                    │   │ network_items            │
//! │ TimingProvider     │──▸│ read_metrics             │
//! └────────────────────┘   └──────────────────────────┘
//! ```
//!
//! Reads never fail from the caller's point of view. A store that cannot be
//! accessed, or a cookie header that cannot be decoded, degrades to an empty
//! snapshot and a `warn` log line. Long-lived listeners are handed out as
//! [`Subscription`]s, which deregister themselves when dropped.

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub mod web;

mod error;
pub use error::*;

mod format;
pub use format::*;

mod entry;
pub use entry::*;

mod subscription;
pub use subscription::*;

mod store;
pub use store::*;

mod cookie;
pub use cookie::*;

mod environment;
pub use environment::*;

mod timing;
pub use timing::*;

#[cfg(any(test, feature = "helpers"))]
mod memory;
#[cfg(any(test, feature = "helpers"))]
pub use memory::*;
