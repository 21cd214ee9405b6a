//! The capabilities the dashboard reads from.

use std::sync::Arc;

use internals_probe::{
    CookieSource, EnvironmentProvider, KeyValueStore, StorageScope, TimingProvider,
};

/// A shared storage area.
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;
/// A shared cookie header source.
pub type SharedCookies = Arc<dyn CookieSource + Send + Sync>;
/// A shared environment provider.
pub type SharedEnvironment = Arc<dyn EnvironmentProvider + Send + Sync>;
/// A shared timing provider.
pub type SharedTiming = Arc<dyn TimingProvider + Send + Sync>;

/// Everything [`DashboardApp`](crate::components::DashboardApp) reads from.
#[derive(Clone)]
pub struct Host {
    /// Durable storage area
    pub local: SharedStore,
    /// Tab-lifetime storage area
    pub session: SharedStore,
    /// Cookie header
    pub cookies: SharedCookies,
    /// Device and connectivity facts
    pub environment: SharedEnvironment,
    /// Navigation and paint timing
    pub timing: SharedTiming,
}

impl Host {
    /// The storage area for `scope`.
    pub fn store(&self, scope: StorageScope) -> SharedStore {
        match scope {
            StorageScope::Local => self.local.clone(),
            StorageScope::Session => self.session.clone(),
        }
    }

    /// The current page, read through the browser.
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    pub fn browser() -> Self {
        use internals_probe::web::{
            BrowserCookies, BrowserEnvironment, BrowserStorage, BrowserTiming,
        };

        Self {
            local: Arc::new(BrowserStorage::new(StorageScope::Local)),
            session: Arc::new(BrowserStorage::new(StorageScope::Session)),
            cookies: Arc::new(BrowserCookies),
            environment: Arc::new(BrowserEnvironment),
            timing: Arc::new(BrowserTiming),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anyhow::Result;
    use internals_probe::{
        EnvironmentInfo, FakeEnvironment, FakeTiming, KeyValueStore, MemoryStore, NetworkStatus,
        StaticCookies, read_all,
    };

    use super::*;

    #[cfg(target_arch = "wasm32")]
    use wasm_bindgen_test::wasm_bindgen_test;

    fn host(local: &MemoryStore, session: &MemoryStore) -> Host {
        Host {
            local: Arc::new(local.clone()),
            session: Arc::new(session.clone()),
            cookies: Arc::new(StaticCookies::new("")),
            environment: Arc::new(FakeEnvironment::new(
                EnvironmentInfo::default(),
                NetworkStatus::default(),
            )),
            timing: Arc::new(FakeTiming::default()),
        }
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
    #[cfg_attr(not(target_arch = "wasm32"), test)]
    fn it_routes_each_scope_to_its_own_store() -> Result<()> {
        let local = MemoryStore::default();
        let session = MemoryStore::default();
        local.set("theme", "dark");
        session.set("draft", "hello");
        let host = host(&local, &session);

        assert_eq!(read_all(&host.store(StorageScope::Local)).len(), 1);
        assert_eq!(read_all(&host.store(StorageScope::Local))[0].key, "theme");

        host.store(StorageScope::Local).clear()?;
        assert!(local.is_empty()?);
        assert!(!session.is_empty()?);

        host.store(StorageScope::Session).clear()?;
        assert!(session.is_empty()?);
        Ok(())
    }
}
