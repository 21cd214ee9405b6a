//! Reactive state fed by the readers.
//!
//! Each `use_*` function takes one snapshot when it is called and, where the
//! reader supports it, subscribes for updates. Subscriptions belong to the
//! current reactive owner and are released by its cleanup, so mounting and
//! unmounting a view any number of times leaves no listener behind.

use std::sync::Arc;

use internals_probe::{
    Entry, EnvironmentChange, MetricItem, PerformanceMetric, Subscription, environment_items,
    network_items, read_all, read_cookie_source, read_metrics,
};
use leptos::prelude::*;

use crate::host::{SharedCookies, SharedEnvironment, SharedStore, SharedTiming};

/// A storage snapshot with the actions that act on it.
#[derive(Clone, Copy)]
pub struct StoreSnapshot {
    /// Entries from the most recent read
    pub entries: RwSignal<Vec<Entry>>,
    /// Re-read the store
    pub refresh: Callback<()>,
    /// Clear the store, then re-read it
    pub clear: Callback<()>,
}

/// Snapshot `store` and expose refresh and clear actions.
pub fn use_store_snapshot(store: SharedStore) -> StoreSnapshot {
    let entries = RwSignal::new(read_all(&store));

    let refresh = {
        let store = store.clone();
        Callback::new(move |_| entries.set(read_all(&store)))
    };

    let clear = Callback::new(move |_| {
        internals_probe::clear(&store);
        refresh.run(());
    });

    StoreSnapshot {
        entries,
        refresh,
        clear,
    }
}

/// Snapshot the cookie header.
pub fn use_cookies(source: SharedCookies) -> ReadSignal<Vec<Entry>> {
    let (entries, _) = signal(read_cookie_source(&source));
    entries
}

/// Environment and network rows, kept current by a subscription.
pub fn use_environment(
    provider: SharedEnvironment,
) -> (Memo<Vec<MetricItem>>, Memo<Vec<MetricItem>>) {
    let environment = RwSignal::new(provider.environment());
    let network = RwSignal::new(provider.network());

    let subscription = provider.subscribe(Arc::new(move |change: EnvironmentChange| {
        environment.maybe_update(|environment| change.apply_to_environment(environment));
        network.maybe_update(|network| change.apply_to_network(network));
    }));
    release_on_cleanup(subscription);

    (
        Memo::new(move |_| environment.with(environment_items)),
        Memo::new(move |_| network.with(network_items)),
    )
}

/// Navigation metrics, re-derived whenever a navigation entry is observed.
pub fn use_navigation_metrics(provider: SharedTiming) -> Memo<Vec<PerformanceMetric>> {
    let navigation = RwSignal::new(provider.navigation());

    let subscription =
        provider.observe_navigation(Arc::new(move |entry| navigation.set(Some(entry))));
    release_on_cleanup(subscription);

    Memo::new(move |_| navigation.with(|navigation| read_metrics(&provider, navigation.as_ref())))
}

fn release_on_cleanup(subscription: Subscription) {
    let subscription = StoredValue::new_local(subscription);
    on_cleanup(move || subscription.dispose());
}
