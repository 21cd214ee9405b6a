//! In-memory capabilities for tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::{
    CookieSource, EnvironmentChange, EnvironmentInfo, EnvironmentProvider, KeyValueStore,
    Listener, NavigationTiming, NetworkStatus, ProbeError, Subscription, TimingProvider,
};

/// A [`KeyValueStore`] kept in memory, enumerated in insertion order.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<IndexMap<String, String>>>,
    denied: Arc<AtomicBool>,
}

impl MemoryStore {
    /// Store `value` against `key`, keeping the key's original position if
    /// it already exists.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.lock().insert(key.into(), value.into());
    }

    /// Make every subsequent access fail (or succeed again).
    pub fn deny_access(&self, denied: bool) {
        self.denied.store(denied, Ordering::SeqCst);
    }

    fn check_access(&self) -> Result<(), ProbeError> {
        if self.denied.load(Ordering::SeqCst) {
            Err(ProbeError::Access("storage access denied".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn len(&self) -> Result<u32, ProbeError> {
        self.check_access()?;
        Ok(self.entries.lock().len() as u32)
    }

    fn key(&self, index: u32) -> Result<Option<String>, ProbeError> {
        self.check_access()?;
        Ok(self
            .entries
            .lock()
            .get_index(index as usize)
            .map(|(key, _)| key.clone()))
    }

    fn get(&self, key: &str) -> Result<Option<String>, ProbeError> {
        self.check_access()?;
        Ok(self.entries.lock().get(key).cloned())
    }

    fn clear(&self) -> Result<(), ProbeError> {
        self.check_access()?;
        self.entries.lock().clear();
        Ok(())
    }
}

/// A [`CookieSource`] that returns a fixed header.
#[derive(Clone, Debug)]
pub struct StaticCookies {
    raw: Option<String>,
}

impl StaticCookies {
    /// A source returning `raw`.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// A source whose header cannot be read.
    pub fn unavailable() -> Self {
        Self { raw: None }
    }
}

impl CookieSource for StaticCookies {
    fn raw(&self) -> Result<String, ProbeError> {
        self.raw
            .clone()
            .ok_or_else(|| ProbeError::Unavailable("document.cookie".into()))
    }
}

/// Listeners keyed by the id of the subscription that registered them.
struct Registry<T> {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, Listener<T>>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            listeners: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Clone + 'static> Registry<T> {
    fn register(self: &Arc<Self>, listener: Listener<T>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().insert(id, listener);

        let registry = self.clone();
        Subscription::new(move || {
            registry.listeners.lock().remove(&id);
        })
    }

    fn emit(&self, value: T) {
        // Listeners may subscribe or unsubscribe re-entrantly
        let listeners: Vec<Listener<T>> = self.listeners.lock().values().cloned().collect();
        for listener in listeners {
            listener(value.clone());
        }
    }

    fn len(&self) -> usize {
        self.listeners.lock().len()
    }
}

/// An [`EnvironmentProvider`] whose facts and events are driven by the test.
#[derive(Clone)]
pub struct FakeEnvironment {
    environment: Arc<Mutex<EnvironmentInfo>>,
    network: Arc<Mutex<NetworkStatus>>,
    registry: Arc<Registry<EnvironmentChange>>,
}

impl FakeEnvironment {
    /// Create a provider reporting the given facts.
    pub fn new(environment: EnvironmentInfo, network: NetworkStatus) -> Self {
        Self {
            environment: Arc::new(Mutex::new(environment)),
            network: Arc::new(Mutex::new(network)),
            registry: Arc::default(),
        }
    }

    /// Apply `change` to the reported facts and deliver it to every
    /// registered listener.
    pub fn emit(&self, change: EnvironmentChange) {
        change.apply_to_environment(&mut self.environment.lock());
        change.apply_to_network(&mut self.network.lock());
        self.registry.emit(change);
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }
}

impl EnvironmentProvider for FakeEnvironment {
    fn environment(&self) -> EnvironmentInfo {
        self.environment.lock().clone()
    }

    fn network(&self) -> NetworkStatus {
        self.network.lock().clone()
    }

    fn subscribe(&self, listener: Listener<EnvironmentChange>) -> Subscription {
        self.registry.register(listener)
    }
}

/// A [`TimingProvider`] whose records are supplied by the test.
#[derive(Clone, Default)]
pub struct FakeTiming {
    navigation: Arc<Mutex<Option<NavigationTiming>>>,
    paints: Arc<Mutex<HashMap<String, f64>>>,
    registry: Arc<Registry<NavigationTiming>>,
}

impl FakeTiming {
    /// Report `navigation` as the buffered navigation entry.
    pub fn with_navigation(self, navigation: NavigationTiming) -> Self {
        *self.navigation.lock() = Some(navigation);
        self
    }

    /// Report a paint entry.
    pub fn with_paint(self, name: impl Into<String>, start_time: f64) -> Self {
        self.paints.lock().insert(name.into(), start_time);
        self
    }

    /// Record a new navigation entry and deliver it to observers.
    pub fn record_navigation(&self, navigation: NavigationTiming) {
        *self.navigation.lock() = Some(navigation);
        self.registry.emit(navigation);
    }

    /// Number of observers currently registered.
    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }
}

impl TimingProvider for FakeTiming {
    fn navigation(&self) -> Option<NavigationTiming> {
        *self.navigation.lock()
    }

    fn paint(&self, name: &str) -> Option<f64> {
        self.paints.lock().get(name).copied()
    }

    fn observe_navigation(&self, listener: Listener<NavigationTiming>) -> Subscription {
        // Buffered entries are delivered as soon as observation starts
        let buffered = *self.navigation.lock();
        if let Some(navigation) = buffered {
            listener(navigation);
        }
        self.registry.register(listener)
    }
}
